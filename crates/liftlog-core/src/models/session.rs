// ABOUTME: Workout session append request and its conversion into log entries
// ABOUTME: Encodes typed exercise metrics into the persisted log-entry shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ExerciseEntry, WorkoutLogEntry};
use crate::errors::ValidationError;
use crate::taxonomy::ExerciseTaxonomy;

/// One user-initiated "finish workout" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Owner of the session
    pub user_email: String,
    /// Exercises performed, in the order they were entered
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutSession {
    /// Create an empty session for a user
    #[must_use]
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            exercises: Vec::new(),
        }
    }

    /// Append an exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseEntry) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Check the session carries an owner and at least one valid exercise
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the email is blank, the session is empty,
    /// or any exercise fails its own validation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_email.trim().is_empty() {
            return Err(ValidationError::MissingUser);
        }
        if self.exercises.is_empty() {
            return Err(ValidationError::EmptySession {
                user_email: self.user_email.clone(),
            });
        }
        self.exercises.iter().try_for_each(ExerciseEntry::validate)
    }

    /// Convert the session into persisted log entries, one per exercise
    ///
    /// Muscle groups are resolved through the taxonomy; exercises it does not
    /// know get their workout type's fallback group.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the session does not validate
    pub fn to_log_entries(
        &self,
        taxonomy: &ExerciseTaxonomy,
        created_at: DateTime<Utc>,
    ) -> Result<Vec<WorkoutLogEntry>, ValidationError> {
        self.validate()?;
        Ok(self
            .exercises
            .iter()
            .map(|exercise| {
                WorkoutLogEntry::from_metrics(
                    self.user_email.clone(),
                    exercise.name(),
                    taxonomy.muscle_group_for(exercise.workout_type(), exercise.name()),
                    exercise.metrics(),
                    created_at,
                )
            })
            .collect())
    }
}
