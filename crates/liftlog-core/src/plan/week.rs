// ABOUTME: Weekly plan store with a rest/workout state machine per day slot
// ABOUTME: Supports toggling days, typed exercise lists, today lookup and strict JSON round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::BTreeMap;
use std::mem;

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use super::DayOfWeek;
use crate::errors::PlanError;
use crate::models::{PlannedExercise, WorkoutType};

/// Planning state for one weekday
///
/// A rest day (`is_workout_day == false`) always has an empty exercise list.
/// Changing `workout_type` keeps the existing exercises, so a slot may hold
/// exercises planned under a previous type; see
/// [`DaySlot::mismatched_exercises`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DaySlot {
    /// Whether the day is a workout day
    pub is_workout_day: bool,
    /// Workout type of the day (meaningless on rest days)
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Planned exercises in order
    pub exercises: Vec<PlannedExercise>,
}

impl DaySlot {
    /// Whether the day is a rest day
    #[must_use]
    pub const fn is_rest_day(&self) -> bool {
        !self.is_workout_day
    }

    /// Planned exercises whose type differs from the slot's current type
    pub fn mismatched_exercises(&self) -> impl Iterator<Item = (usize, &PlannedExercise)> {
        self.exercises
            .iter()
            .enumerate()
            .filter(move |(_, exercise)| exercise.workout_type != self.workout_type)
    }

    fn check_index(&self, day: DayOfWeek, index: usize) -> Result<(), PlanError> {
        if index < self.exercises.len() {
            Ok(())
        } else {
            Err(PlanError::IndexOutOfRange {
                day,
                index,
                len: self.exercises.len(),
            })
        }
    }
}

/// A user's weekly schedule of seven day slots
///
/// One instance is owned by one user session. Edits happen in memory; saving
/// is an explicit step performed by the caller.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, DaySlot>")]
pub struct WeeklyPlan {
    days: [DaySlot; 7],
}

impl WeeklyPlan {
    /// A plan with every day at rest, typed strength, with no exercises
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for a day
    #[must_use]
    pub const fn slot(&self, day: DayOfWeek) -> &DaySlot {
        &self.days[day.index()]
    }

    fn slot_mut(&mut self, day: DayOfWeek) -> &mut DaySlot {
        &mut self.days[day.index()]
    }

    /// All days with their slots, Monday first
    pub fn days(&self) -> impl Iterator<Item = (DayOfWeek, &DaySlot)> {
        DayOfWeek::ALL.into_iter().zip(self.days.iter())
    }

    /// Days currently marked as workout days
    pub fn workout_days(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        self.days()
            .filter(|(_, slot)| slot.is_workout_day)
            .map(|(day, _)| day)
    }

    /// Flip a day between rest and workout, returning the new workout state
    ///
    /// Both transitions clear the exercise list. The slot type is left as is;
    /// callers switching a day on are expected to set it next.
    pub fn toggle_day(&mut self, day: DayOfWeek) -> bool {
        let slot = self.slot_mut(day);
        slot.is_workout_day = !slot.is_workout_day;
        slot.exercises.clear();
        debug!(day = %day, workout = slot.is_workout_day, "Toggled plan day");
        slot.is_workout_day
    }

    /// Change a day's workout type without touching its exercises
    pub fn set_day_type(&mut self, day: DayOfWeek, workout_type: WorkoutType) {
        self.slot_mut(day).workout_type = workout_type;
    }

    /// Append an exercise to a workout day, returning its index
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DayNotWorkout` if the day is a rest day
    pub fn add_exercise(
        &mut self,
        day: DayOfWeek,
        exercise: PlannedExercise,
    ) -> Result<usize, PlanError> {
        let slot = self.slot_mut(day);
        if !slot.is_workout_day {
            return Err(PlanError::DayNotWorkout { day });
        }
        slot.exercises.push(exercise);
        Ok(slot.exercises.len() - 1)
    }

    /// Replace the exercise at `index`, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns `PlanError::IndexOutOfRange` if `index` is not a current position;
    /// the list is left unchanged
    pub fn update_exercise(
        &mut self,
        day: DayOfWeek,
        index: usize,
        exercise: PlannedExercise,
    ) -> Result<PlannedExercise, PlanError> {
        let slot = self.slot_mut(day);
        slot.check_index(day, index)?;
        Ok(mem::replace(&mut slot.exercises[index], exercise))
    }

    /// Remove the exercise at `index`, returning it
    ///
    /// # Errors
    ///
    /// Returns `PlanError::IndexOutOfRange` if `index` is not a current position;
    /// the list is left unchanged
    pub fn remove_exercise(
        &mut self,
        day: DayOfWeek,
        index: usize,
    ) -> Result<PlannedExercise, PlanError> {
        let slot = self.slot_mut(day);
        slot.check_index(day, index)?;
        Ok(slot.exercises.remove(index))
    }

    /// Slot for the given calendar weekday
    #[must_use]
    pub fn todays_slot(&self, weekday: Weekday) -> &DaySlot {
        self.slot(DayOfWeek::from(weekday))
    }

    /// Encode the plan as its persisted JSON blob
    ///
    /// # Errors
    ///
    /// Returns a serialization error from `serde_json`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted JSON blob
    ///
    /// The blob must name all seven days, nothing else, and every slot must be
    /// complete. Rest days carrying exercises are rejected as well.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::CorruptPlan` for any blob that does not decode to a
    /// full, consistent week
    pub fn from_json(blob: &str) -> Result<Self, PlanError> {
        serde_json::from_str(blob).map_err(|e| {
            debug!(error = %e, "Rejected persisted weekly plan");
            PlanError::corrupt(e.to_string())
        })
    }
}

impl Serialize for WeeklyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DayOfWeek::ALL.len()))?;
        for (day, slot) in self.days() {
            map.serialize_entry(day.as_str(), slot)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, DaySlot>> for WeeklyPlan {
    type Error = PlanError;

    fn try_from(raw: BTreeMap<String, DaySlot>) -> Result<Self, Self::Error> {
        let mut days: [Option<DaySlot>; 7] = Default::default();
        for (name, slot) in raw {
            let day: DayOfWeek = name
                .parse()
                .map_err(|_| PlanError::corrupt(format!("unknown day '{name}'")))?;
            if !slot.is_workout_day && !slot.exercises.is_empty() {
                return Err(PlanError::corrupt(format!(
                    "{day} is a rest day but lists {} exercises",
                    slot.exercises.len()
                )));
            }
            if days[day.index()].replace(slot).is_some() {
                return Err(PlanError::corrupt(format!("{day} appears more than once")));
            }
        }

        let mut plan = Self::new();
        for day in DayOfWeek::ALL {
            plan.days[day.index()] = days[day.index()]
                .take()
                .ok_or_else(|| PlanError::corrupt(format!("missing {day}")))?;
        }
        Ok(plan)
    }
}
