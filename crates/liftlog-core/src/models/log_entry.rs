// ABOUTME: Workout log entry model as persisted by the logging collaborator
// ABOUTME: Decodes overloaded sets/reps/weight fields into typed per-workout metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{MuscleGroup, WorkoutType};

/// One exercise record within a logged workout session
///
/// The persisted shape reuses strength fields for every workout type: cardio
/// stores minutes in `reps` and distance in `weight`, stretching stores
/// minutes in `reps` with a zero `weight`. Use [`WorkoutLogEntry::metrics`]
/// to read them back with their real meaning.
///
/// Missing, `null` or mistyped fields decode to defaults (`Other` muscle
/// group, zero metrics, strength type) so that reading a snapshot never fails.
/// Counts and amounts also accept numeric strings; negative or fractional
/// counts read as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutLogEntry {
    /// Entry identifier assigned at append time
    #[serde(deserialize_with = "lenient")]
    pub id: Uuid,
    /// Email of the user who logged the entry
    #[serde(deserialize_with = "lenient")]
    pub user_email: String,
    /// Exercise name as logged
    #[serde(deserialize_with = "lenient")]
    pub exercise_name: String,
    /// Muscle-group bucket
    #[serde(deserialize_with = "lenient")]
    pub muscle_group: MuscleGroup,
    /// Workout type the entry was logged under
    #[serde(deserialize_with = "lenient_workout_type")]
    pub workout_type: WorkoutType,
    /// Sets (strength) or 1 for timed work
    #[serde(deserialize_with = "lenient_count")]
    pub sets: u32,
    /// Reps (strength) or minutes (cardio, stretch)
    #[serde(deserialize_with = "lenient_count")]
    pub reps: u32,
    /// Load (strength), distance (cardio) or zero (stretch)
    #[serde(deserialize_with = "lenient_amount")]
    pub weight: f64,
    /// When the entry was persisted
    #[serde(deserialize_with = "lenient")]
    pub created_at: DateTime<Utc>,
}

// Field decoders for persisted entries. Each one accepts any JSON value and
// falls back to the field default instead of failing the whole snapshot.

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_workout_type<'de, D>(deserializer: D) -> Result<WorkoutType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => raw.parse().unwrap_or_default(),
        _ => WorkoutType::default(),
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = numeric(&Value::deserialize(deserializer)?);
    Ok(match amount {
        Some(n) if n.fract().abs() < f64::EPSILON && n <= f64::from(u32::MAX) => n as u32,
        _ => 0,
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(numeric(&Value::deserialize(deserializer)?).unwrap_or(0.0))
}

/// Finite, non-negative number from a JSON number or numeric string
fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (n.is_finite() && n >= 0.0).then_some(n)
}

impl WorkoutLogEntry {
    /// Create a strength entry with zeroed metrics
    #[must_use]
    pub fn new(
        user_email: impl Into<String>,
        exercise_name: impl Into<String>,
        muscle_group: MuscleGroup,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_email: user_email.into(),
            exercise_name: exercise_name.into(),
            muscle_group,
            workout_type: WorkoutType::Strength,
            sets: 0,
            reps: 0,
            weight: 0.0,
            created_at,
        }
    }

    /// Create an entry from typed metrics, encoding them into the persisted shape
    #[must_use]
    pub fn from_metrics(
        user_email: impl Into<String>,
        exercise_name: impl Into<String>,
        muscle_group: MuscleGroup,
        metrics: EntryMetrics,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(user_email, exercise_name, muscle_group, created_at).with_metrics(metrics)
    }

    /// Replace the metrics (and workout type) of this entry
    #[must_use]
    pub fn with_metrics(mut self, metrics: EntryMetrics) -> Self {
        self.workout_type = metrics.workout_type();
        match metrics {
            EntryMetrics::Strength { sets, reps, weight } => {
                self.sets = sets;
                self.reps = reps;
                self.weight = weight;
            }
            EntryMetrics::Cardio { minutes, distance } => {
                self.sets = 1;
                self.reps = minutes;
                self.weight = distance.unwrap_or(0.0);
            }
            EntryMetrics::Stretch { minutes } => {
                self.sets = 1;
                self.reps = minutes;
                self.weight = 0.0;
            }
        }
        self
    }

    /// Decode the overloaded persisted fields according to the workout type
    #[must_use]
    pub fn metrics(&self) -> EntryMetrics {
        match self.workout_type {
            WorkoutType::Strength => EntryMetrics::Strength {
                sets: self.sets,
                reps: self.reps,
                weight: self.weight,
            },
            WorkoutType::Cardio => EntryMetrics::Cardio {
                minutes: self.reps,
                distance: (self.weight > 0.0).then_some(self.weight),
            },
            WorkoutType::Stretch => EntryMetrics::Stretch { minutes: self.reps },
        }
    }

    /// Whether this entry belongs to the given user
    #[must_use]
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.user_email == email
    }
}

/// Typed view over the metrics of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryMetrics {
    /// Resistance work
    Strength {
        /// Number of sets
        sets: u32,
        /// Reps per set
        reps: u32,
        /// Load per rep
        weight: f64,
    },
    /// Endurance work
    Cardio {
        /// Duration in minutes
        minutes: u32,
        /// Distance covered, if recorded
        distance: Option<f64>,
    },
    /// Mobility work
    Stretch {
        /// Duration in minutes
        minutes: u32,
    },
}

impl EntryMetrics {
    /// Workout type these metrics belong to
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Strength { .. } => WorkoutType::Strength,
            Self::Cardio { .. } => WorkoutType::Cardio,
            Self::Stretch { .. } => WorkoutType::Stretch,
        }
    }

    /// Timed duration, if the metrics are time based
    #[must_use]
    pub const fn minutes(&self) -> Option<u32> {
        match self {
            Self::Cardio { minutes, .. } | Self::Stretch { minutes } => Some(*minutes),
            Self::Strength { .. } => None,
        }
    }

    /// Distance covered, for cardio with a recorded distance
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        match self {
            Self::Cardio { distance, .. } => *distance,
            Self::Strength { .. } | Self::Stretch { .. } => None,
        }
    }
}

/// Registered user as shown on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Account email
    pub email: String,
    /// Optional display name chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl UserSummary {
    /// Create a summary with only an email
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: None,
            profile_picture_url: None,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Read-only view of everything the analytics engine consumes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogSnapshot {
    /// All log entries for all users
    pub log_entries: Vec<WorkoutLogEntry>,
    /// All known users
    pub users: Vec<UserSummary>,
}

impl LogSnapshot {
    /// Create a snapshot from entries and users
    #[must_use]
    pub const fn new(log_entries: Vec<WorkoutLogEntry>, users: Vec<UserSummary>) -> Self {
        Self { log_entries, users }
    }

    /// Entries owned by a user, in log order
    pub fn entries_for<'a>(
        &'a self,
        email: &'a str,
    ) -> impl Iterator<Item = &'a WorkoutLogEntry> + 'a {
        self.log_entries
            .iter()
            .filter(move |entry| entry.is_owned_by(email))
    }

    /// Find a user summary by email
    #[must_use]
    pub fn user(&self, email: &str) -> Option<&UserSummary> {
        self.users.iter().find(|user| user.email == email)
    }
}
