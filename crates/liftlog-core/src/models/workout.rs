// ABOUTME: Workout type and muscle group enumerations for logged exercises
// ABOUTME: Defines the fixed muscle-group buckets with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::muscle_groups;

/// Kind of workout an exercise belongs to
///
/// The type decides which metrics an exercise carries: strength work records
/// sets, reps and load, cardio records minutes and an optional distance, and
/// stretching records minutes only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Resistance training with sets, reps and load
    #[default]
    Strength,
    /// Endurance work measured in minutes and distance
    Cardio,
    /// Mobility work measured in minutes
    #[serde(alias = "flexibility")]
    Stretch,
}

impl WorkoutType {
    /// All workout types in display order
    pub const ALL: [Self; 3] = [Self::Strength, Self::Cardio, Self::Stretch];

    /// Wire name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Stretch => "stretch",
        }
    }

    /// Fields an exercise of this type must carry, in entry-form order
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Strength => &["sets", "reps", "weight"],
            Self::Cardio | Self::Stretch => &["minutes"],
        }
    }

    /// Muscle group for an exercise of this type missing from the catalogue
    ///
    /// Timed work has a bucket of its own; unknown strength work is `Other`.
    #[must_use]
    pub fn fallback_muscle_group(self) -> MuscleGroup {
        match self {
            Self::Strength => MuscleGroup::default(),
            Self::Cardio => MuscleGroup::Cardio,
            Self::Stretch => MuscleGroup::Flexibility,
        }
    }

    /// Fields an exercise of this type may carry in addition to the required ones
    #[must_use]
    pub const fn optional_fields(self) -> &'static [&'static str] {
        match self {
            Self::Cardio => &["distance"],
            Self::Strength | Self::Stretch => &[],
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "stretch" | "flexibility" => Ok(Self::Stretch),
            other => Err(format!("Unknown workout type: {other}")),
        }
    }
}

/// Muscle-group bucket attached to each log entry
///
/// Seven buckets are tracked by the analytics engine. Any other label is kept
/// verbatim in `Other` so that it survives a read/write cycle, but it never
/// receives a bucket of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MuscleGroup {
    /// Chest
    Chest,
    /// Legs
    Legs,
    /// Back
    Back,
    /// Shoulders
    Shoulders,
    /// Arms
    Arms,
    /// Cardio (treated as non load-bearing)
    Cardio,
    /// Flexibility (treated as non load-bearing)
    Flexibility,
    /// Label outside the tracked buckets
    Other(String),
}

impl MuscleGroup {
    /// The seven tracked buckets, in the order the muscle split reports them
    pub const TRACKED: [Self; 7] = [
        Self::Chest,
        Self::Legs,
        Self::Back,
        Self::Shoulders,
        Self::Arms,
        Self::Cardio,
        Self::Flexibility,
    ];

    /// Parse a stored label; unknown labels become `Other`
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            muscle_groups::CHEST => Self::Chest,
            muscle_groups::LEGS => Self::Legs,
            muscle_groups::BACK => Self::Back,
            muscle_groups::SHOULDERS => Self::Shoulders,
            muscle_groups::ARMS => Self::Arms,
            muscle_groups::CARDIO => Self::Cardio,
            muscle_groups::FLEXIBILITY => Self::Flexibility,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Chest => muscle_groups::CHEST,
            Self::Legs => muscle_groups::LEGS,
            Self::Back => muscle_groups::BACK,
            Self::Shoulders => muscle_groups::SHOULDERS,
            Self::Arms => muscle_groups::ARMS,
            Self::Cardio => muscle_groups::CARDIO,
            Self::Flexibility => muscle_groups::FLEXIBILITY,
            Self::Other(label) => label,
        }
    }

    /// Whether this group is one of the seven tracked buckets
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether loads logged against this group count toward personal bests
    #[must_use]
    pub const fn is_load_bearing(&self) -> bool {
        !matches!(self, Self::Cardio | Self::Flexibility)
    }
}

impl Default for MuscleGroup {
    fn default() -> Self {
        Self::Other(muscle_groups::OTHER.to_owned())
    }
}

impl From<String> for MuscleGroup {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for MuscleGroup {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<MuscleGroup> for String {
    fn from(group: MuscleGroup) -> Self {
        match group {
            MuscleGroup::Other(label) => label,
            tracked => tracked.label().to_owned(),
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
