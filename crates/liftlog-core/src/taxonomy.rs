// ABOUTME: Static exercise taxonomy mapping workout types to exercises and muscle groups
// ABOUTME: Used to default log-entry muscle groups and to offer selectable plan exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Exercise taxonomy
//!
//! Read-only catalogue of `workout type -> (exercise name -> muscle group)`.
//! Lookups by name ignore ASCII case and surrounding whitespace.

use serde::Serialize;

use crate::models::{MuscleGroup, WorkoutType};

const STRENGTH_EXERCISES: &[(&str, MuscleGroup)] = &[
    ("Bench Press", MuscleGroup::Chest),
    ("Incline Dumbbell Press", MuscleGroup::Chest),
    ("Push Up", MuscleGroup::Chest),
    ("Chest Fly", MuscleGroup::Chest),
    ("Squat", MuscleGroup::Legs),
    ("Leg Press", MuscleGroup::Legs),
    ("Lunges", MuscleGroup::Legs),
    ("Romanian Deadlift", MuscleGroup::Legs),
    ("Calf Raise", MuscleGroup::Legs),
    ("Deadlift", MuscleGroup::Back),
    ("Pull Up", MuscleGroup::Back),
    ("Barbell Row", MuscleGroup::Back),
    ("Lat Pulldown", MuscleGroup::Back),
    ("Overhead Press", MuscleGroup::Shoulders),
    ("Lateral Raise", MuscleGroup::Shoulders),
    ("Face Pull", MuscleGroup::Shoulders),
    ("Bicep Curl", MuscleGroup::Arms),
    ("Hammer Curl", MuscleGroup::Arms),
    ("Tricep Dip", MuscleGroup::Arms),
    ("Tricep Pushdown", MuscleGroup::Arms),
];

const CARDIO_EXERCISES: &[(&str, MuscleGroup)] = &[
    ("Running", MuscleGroup::Cardio),
    ("Cycling", MuscleGroup::Cardio),
    ("Rowing", MuscleGroup::Cardio),
    ("Swimming", MuscleGroup::Cardio),
    ("Jump Rope", MuscleGroup::Cardio),
    ("Elliptical", MuscleGroup::Cardio),
    ("Stair Climber", MuscleGroup::Cardio),
];

const STRETCH_EXERCISES: &[(&str, MuscleGroup)] = &[
    ("Hamstring Stretch", MuscleGroup::Flexibility),
    ("Hip Flexor Stretch", MuscleGroup::Flexibility),
    ("Shoulder Stretch", MuscleGroup::Flexibility),
    ("Cat-Cow", MuscleGroup::Flexibility),
    ("Child's Pose", MuscleGroup::Flexibility),
    ("Yoga Flow", MuscleGroup::Flexibility),
];

/// One exercise known to the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyEntry {
    /// Canonical exercise name
    pub name: String,
    /// Muscle group the exercise trains
    pub muscle_group: MuscleGroup,
    /// Workout type the exercise is listed under
    pub workout_type: WorkoutType,
}

/// Read-only exercise catalogue
#[derive(Debug, Clone, Default)]
pub struct ExerciseTaxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl ExerciseTaxonomy {
    /// Built-in catalogue shipped with liftlog
    #[must_use]
    pub fn standard() -> Self {
        let tables = [
            (WorkoutType::Strength, STRENGTH_EXERCISES),
            (WorkoutType::Cardio, CARDIO_EXERCISES),
            (WorkoutType::Stretch, STRETCH_EXERCISES),
        ];
        Self::from_entries(tables.iter().flat_map(|(workout_type, table)| {
            table.iter().map(|(name, muscle_group)| TaxonomyEntry {
                name: (*name).to_owned(),
                muscle_group: muscle_group.clone(),
                workout_type: *workout_type,
            })
        }))
    }

    /// Build a catalogue from arbitrary entries; later duplicates of a
    /// `(type, name)` pair are ignored
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = TaxonomyEntry>) -> Self {
        let mut taxonomy = Self::default();
        for entry in entries {
            if taxonomy.lookup(entry.workout_type, &entry.name).is_none() {
                taxonomy.entries.push(entry);
            }
        }
        taxonomy
    }

    /// Exercises listed under a workout type, in catalogue order
    pub fn exercises_for(&self, workout_type: WorkoutType) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.workout_type == workout_type)
    }

    /// Look up an exercise under a specific workout type
    #[must_use]
    pub fn lookup(&self, workout_type: WorkoutType, name: &str) -> Option<&TaxonomyEntry> {
        self.exercises_for(workout_type)
            .find(|entry| names_match(&entry.name, name))
    }

    /// Look up an exercise under any workout type
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TaxonomyEntry> {
        self.entries.iter().find(|entry| names_match(&entry.name, name))
    }

    /// Muscle group for an exercise
    ///
    /// Unknown cardio and stretch names land in `Cardio` and `Flexibility`;
    /// unknown strength names fall back to `Other`.
    #[must_use]
    pub fn muscle_group_for(&self, workout_type: WorkoutType, name: &str) -> MuscleGroup {
        self.lookup(workout_type, name).map_or_else(
            || workout_type.fallback_muscle_group(),
            |entry| entry.muscle_group.clone(),
        )
    }

    /// Number of exercises in the catalogue
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn names_match(known: &str, requested: &str) -> bool {
    known.eq_ignore_ascii_case(requested.trim())
}
