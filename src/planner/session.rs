// ABOUTME: Per-user plan session with dirty tracking and explicit persistence
// ABOUTME: Maps corrupt persisted plans to a distinct error so callers can choose to reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::Datelike;
use liftlog_core::models::{ExerciseEntry, PlannedExercise, WorkoutSession, WorkoutType};
use liftlog_core::errors::PlanError;
use liftlog_core::plan::{DayOfWeek, DaySlot, WeeklyPlan};
use liftlog_core::taxonomy::{ExerciseTaxonomy, TaxonomyEntry};
use tracing::{debug, warn};

use crate::database_plugins::FitnessStore;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;

/// One user's weekly plan plus whether it has unsaved edits
///
/// Edits are never persisted implicitly; call [`PlanSession::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSession {
    user_email: String,
    plan: WeeklyPlan,
    dirty: bool,
}

impl PlanSession {
    /// Start a session on an in-memory plan
    #[must_use]
    pub fn new(user_email: impl Into<String>, plan: WeeklyPlan) -> Self {
        Self {
            user_email: user_email.into(),
            plan,
            dirty: false,
        }
    }

    /// Load the user's persisted plan
    ///
    /// A user with no saved plan starts from the default week (all rest days).
    ///
    /// # Errors
    ///
    /// Returns `CORRUPT_PLAN` if the stored blob does not decode, or the
    /// store's error if it cannot be read
    pub async fn load<S: FitnessStore + ?Sized>(store: &S, user_email: &str) -> AppResult<Self> {
        if user_email.trim().is_empty() {
            return Err(AppError::invalid_input("user email is required"));
        }
        let Some(blob) = store.load_plan_blob(user_email).await? else {
            debug!(user.email = %user_email, "No saved plan, using default week");
            return Ok(Self::new(user_email, WeeklyPlan::default()));
        };
        match WeeklyPlan::from_json(&blob) {
            Ok(plan) => Ok(Self::new(user_email, plan)),
            Err(e) => {
                warn!(user.email = %user_email, error = %e, "Persisted weekly plan is corrupt");
                Err(AppError::from(e).with_user(user_email))
            }
        }
    }

    /// Replace the plan with the default week, leaving it unsaved
    ///
    /// This is the caller's recovery path after a `CORRUPT_PLAN` load.
    #[must_use]
    pub fn reset(user_email: &str) -> Self {
        AppLogger::log_plan_reset(user_email, "reset to default week");
        Self {
            user_email: user_email.to_owned(),
            plan: WeeklyPlan::default(),
            dirty: true,
        }
    }

    /// Owner of the plan
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Current plan
    #[must_use]
    pub const fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    /// Whether there are edits not yet saved
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flip a day between rest and workout
    pub fn toggle_day(&mut self, day: DayOfWeek) -> bool {
        self.dirty = true;
        self.plan.toggle_day(day)
    }

    /// Change a day's workout type
    pub fn set_day_type(&mut self, day: DayOfWeek, workout_type: WorkoutType) {
        self.dirty = true;
        self.plan.set_day_type(day, workout_type);
    }

    /// Validate and append a planned exercise
    ///
    /// # Errors
    ///
    /// Returns `INVALID_STATE` if the day is a rest day, checked before the
    /// exercise itself, or a validation error if required fields for the
    /// exercise type are missing
    pub fn add_exercise(&mut self, day: DayOfWeek, exercise: PlannedExercise) -> AppResult<usize> {
        if self.plan.slot(day).is_rest_day() {
            return Err(PlanError::DayNotWorkout { day }.into());
        }
        exercise.validate()?;
        let index = self.plan.add_exercise(day, exercise)?;
        self.dirty = true;
        Ok(index)
    }

    /// Validate and replace a planned exercise
    ///
    /// # Errors
    ///
    /// Returns a validation error for incomplete exercises or
    /// `VALUE_OUT_OF_RANGE` for a bad index; the plan is unchanged on error
    pub fn update_exercise(
        &mut self,
        day: DayOfWeek,
        index: usize,
        exercise: PlannedExercise,
    ) -> AppResult<PlannedExercise> {
        exercise.validate()?;
        let previous = self.plan.update_exercise(day, index, exercise)?;
        self.dirty = true;
        Ok(previous)
    }

    /// Remove a planned exercise
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for a bad index; the plan is unchanged
    pub fn remove_exercise(&mut self, day: DayOfWeek, index: usize) -> AppResult<PlannedExercise> {
        let removed = self.plan.remove_exercise(day, index)?;
        self.dirty = true;
        Ok(removed)
    }

    /// Exercises the taxonomy offers for a day's current type
    pub fn selectable_exercises<'a>(
        &self,
        taxonomy: &'a ExerciseTaxonomy,
        day: DayOfWeek,
    ) -> impl Iterator<Item = &'a TaxonomyEntry> {
        taxonomy.exercises_for(self.plan.slot(day).workout_type)
    }

    /// Today's slot for the given timestamp
    #[must_use]
    pub fn today(&self, now: &impl Datelike) -> &DaySlot {
        self.plan.todays_slot(now.weekday())
    }

    /// Build a workout session pre-filled from today's planned exercises
    ///
    /// # Errors
    ///
    /// Returns `INVALID_STATE` if today is a rest day, and a validation error
    /// if nothing is planned or a planned exercise is incomplete
    pub fn session_from_today(&self, now: &impl Datelike) -> AppResult<WorkoutSession> {
        let day = DayOfWeek::from(now.weekday());
        let slot = self.plan.slot(day);
        if !slot.is_workout_day {
            return Err(AppError::new(
                ErrorCode::InvalidState,
                format!("{day} is a rest day"),
            ));
        }
        let exercises = slot
            .exercises
            .iter()
            .map(ExerciseEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let session = WorkoutSession {
            user_email: self.user_email.clone(),
            exercises,
        };
        session.validate()?;
        Ok(session)
    }

    /// Persist the plan and clear the dirty flag
    ///
    /// # Errors
    ///
    /// Returns a serialization error or the store's error; the session stays
    /// dirty if saving fails
    pub async fn save<S: FitnessStore + ?Sized>(&mut self, store: &S) -> AppResult<()> {
        let blob = self.plan.to_json()?;
        store.save_plan_blob(&self.user_email, blob).await?;
        self.dirty = false;
        AppLogger::log_plan_saved(&self.user_email, self.plan.workout_days().count());
        Ok(())
    }
}
