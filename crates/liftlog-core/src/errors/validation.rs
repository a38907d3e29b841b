// ABOUTME: Validation errors for exercise entries against the per-type field table
// ABOUTME: Raised when a planned or logged exercise lacks a field its type requires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use thiserror::Error;

use crate::models::WorkoutType;

/// Exercise entry failed the required-field check for its workout type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field required by the exercise's type is absent
    #[error("{workout_type} exercise '{exercise}' is missing required field '{field}'")]
    MissingField {
        /// Exercise name as entered
        exercise: String,
        /// Type whose field table was applied
        workout_type: WorkoutType,
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field carried a negative or non-finite value
    #[error("exercise '{exercise}' has invalid value for '{field}'")]
    InvalidValue {
        /// Exercise name as entered
        exercise: String,
        /// Name of the offending field
        field: &'static str,
    },

    /// The exercise name is blank
    #[error("exercise name must not be empty")]
    EmptyName,

    /// A session carried no exercises
    #[error("workout session for {user_email} has no exercises")]
    EmptySession {
        /// Owner of the rejected session
        user_email: String,
    },

    /// The session owner's email is blank
    #[error("workout session has no user email")]
    MissingUser,
}
