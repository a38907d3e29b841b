// ABOUTME: Planned and logged exercise shapes with per-type required-field checks
// ABOUTME: PlannedExercise is the loose plan shape, ExerciseEntry the validated tagged form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use serde::{Deserialize, Serialize};

use super::{EntryMetrics, WorkoutType};
use crate::errors::ValidationError;

/// An exercise scheduled on a plan day
///
/// Plans store whatever fields the editor passed, so every metric is optional
/// here. The fields relevant to each type are:
///
/// | type     | required              | optional   |
/// |----------|-----------------------|------------|
/// | strength | sets, reps, weight    |            |
/// | cardio   | minutes               | distance   |
/// | stretch  | minutes               |            |
///
/// [`PlannedExercise::validate`] applies this table; the plan store itself
/// does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Workout type the exercise was planned under
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Planned sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Planned reps per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Planned load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Planned duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    /// Planned distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl PlannedExercise {
    /// Create a planned exercise with no metrics filled in
    #[must_use]
    pub fn new(name: impl Into<String>, workout_type: WorkoutType) -> Self {
        Self {
            name: name.into(),
            workout_type,
            sets: None,
            reps: None,
            weight: None,
            minutes: None,
            distance: None,
        }
    }

    /// Planned strength exercise
    #[must_use]
    pub fn strength(name: impl Into<String>, sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            sets: Some(sets),
            reps: Some(reps),
            weight: Some(weight),
            ..Self::new(name, WorkoutType::Strength)
        }
    }

    /// Planned cardio exercise
    #[must_use]
    pub fn cardio(name: impl Into<String>, minutes: u32, distance: Option<f64>) -> Self {
        Self {
            minutes: Some(minutes),
            distance,
            ..Self::new(name, WorkoutType::Cardio)
        }
    }

    /// Planned stretch
    #[must_use]
    pub fn stretch(name: impl Into<String>, minutes: u32) -> Self {
        Self {
            minutes: Some(minutes),
            ..Self::new(name, WorkoutType::Stretch)
        }
    }

    /// Check the exercise against the required-field table for its type
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank, a required field is
    /// absent, or a numeric field is negative or non-finite
    pub fn validate(&self) -> Result<(), ValidationError> {
        ExerciseEntry::try_from(self).map(|_| ())
    }
}

/// A validated exercise within a workout session
///
/// Each variant carries exactly the metrics its type defines, so a cardio
/// entry can never be mistaken for a load-bearing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExerciseEntry {
    /// Resistance exercise
    Strength {
        /// Exercise name
        name: String,
        /// Sets performed
        sets: u32,
        /// Reps per set
        reps: u32,
        /// Load per rep
        weight: f64,
    },
    /// Endurance exercise
    Cardio {
        /// Exercise name
        name: String,
        /// Duration in minutes
        minutes: u32,
        /// Distance covered
        #[serde(default, skip_serializing_if = "Option::is_none")]
        distance: Option<f64>,
    },
    /// Mobility exercise
    Stretch {
        /// Exercise name
        name: String,
        /// Duration in minutes
        minutes: u32,
    },
}

impl ExerciseEntry {
    /// Exercise name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Strength { name, .. } | Self::Cardio { name, .. } | Self::Stretch { name, .. } => {
                name
            }
        }
    }

    /// Workout type of the entry
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Strength { .. } => WorkoutType::Strength,
            Self::Cardio { .. } => WorkoutType::Cardio,
            Self::Stretch { .. } => WorkoutType::Stretch,
        }
    }

    /// Typed metrics of the entry
    #[must_use]
    pub const fn metrics(&self) -> EntryMetrics {
        match self {
            Self::Strength {
                sets, reps, weight, ..
            } => EntryMetrics::Strength {
                sets: *sets,
                reps: *reps,
                weight: *weight,
            },
            Self::Cardio {
                minutes, distance, ..
            } => EntryMetrics::Cardio {
                minutes: *minutes,
                distance: *distance,
            },
            Self::Stretch { minutes, .. } => EntryMetrics::Stretch { minutes: *minutes },
        }
    }

    /// Check name and numeric ranges
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or a load/distance is
    /// negative or non-finite
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name().trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        match self {
            Self::Strength { name, weight, .. } => check_non_negative(name, "weight", *weight),
            Self::Cardio {
                name,
                distance: Some(distance),
                ..
            } => check_non_negative(name, "distance", *distance),
            Self::Cardio { .. } | Self::Stretch { .. } => Ok(()),
        }
    }
}

fn check_non_negative(
    exercise: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            exercise: exercise.to_owned(),
            field,
        })
    }
}

fn require<T: Copy>(
    planned: &PlannedExercise,
    field: &'static str,
    value: Option<T>,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingField {
        exercise: planned.name.clone(),
        workout_type: planned.workout_type,
        field,
    })
}

impl TryFrom<&PlannedExercise> for ExerciseEntry {
    type Error = ValidationError;

    fn try_from(planned: &PlannedExercise) -> Result<Self, Self::Error> {
        let name = planned.name.trim().to_owned();
        let entry = match planned.workout_type {
            WorkoutType::Strength => Self::Strength {
                sets: require(planned, "sets", planned.sets)?,
                reps: require(planned, "reps", planned.reps)?,
                weight: require(planned, "weight", planned.weight)?,
                name,
            },
            WorkoutType::Cardio => Self::Cardio {
                minutes: require(planned, "minutes", planned.minutes)?,
                distance: planned.distance,
                name,
            },
            WorkoutType::Stretch => Self::Stretch {
                minutes: require(planned, "minutes", planned.minutes)?,
                name,
            },
        };
        entry.validate()?;
        Ok(entry)
    }
}

impl From<&ExerciseEntry> for PlannedExercise {
    fn from(entry: &ExerciseEntry) -> Self {
        match entry {
            ExerciseEntry::Strength {
                name,
                sets,
                reps,
                weight,
            } => Self::strength(name.clone(), *sets, *reps, *weight),
            ExerciseEntry::Cardio {
                name,
                minutes,
                distance,
            } => Self::cardio(name.clone(), *minutes, *distance),
            ExerciseEntry::Stretch { name, minutes } => Self::stretch(name.clone(), *minutes),
        }
    }
}
