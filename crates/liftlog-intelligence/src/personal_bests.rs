// ABOUTME: Personal-best tracking for load-bearing exercises
// ABOUTME: Keeps the heaviest logged weight per exercise with the entry that first reached it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use liftlog_core::models::WorkoutLogEntry;
use serde::{Deserialize, Serialize};

/// Heaviest load recorded for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBest {
    /// Maximum weight logged
    pub weight: f64,
    /// Timestamp of the first entry that reached `weight`
    pub achieved_at: DateTime<Utc>,
}

/// Personal bests keyed by exercise name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalBests(BTreeMap<String, PersonalBest>);

impl PersonalBests {
    /// Best for an exercise, if one was logged
    #[must_use]
    pub fn get(&self, exercise: &str) -> Option<&PersonalBest> {
        self.0.get(exercise)
    }

    /// Best weight for an exercise, if one was logged
    #[must_use]
    pub fn weight(&self, exercise: &str) -> Option<f64> {
        self.get(exercise).map(|best| best.weight)
    }

    /// Exercises with their bests, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonalBest)> {
        self.0.iter().map(|(name, best)| (name.as_str(), best))
    }

    /// Number of exercises with a best
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no bests exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn observe(&mut self, entry: &WorkoutLogEntry) {
        let candidate = PersonalBest {
            weight: entry.weight,
            achieved_at: entry.created_at,
        };
        match self.0.entry(entry.exercise_name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if candidate.weight > slot.get().weight {
                    slot.insert(candidate);
                }
            }
        }
    }
}

/// Compute personal bests over one user's entries
///
/// Only entries whose muscle group is load-bearing (anything but Cardio and
/// Flexibility) with a positive weight count. An equal weight logged later
/// does not replace the first one.
pub fn personal_bests<'a>(entries: impl IntoIterator<Item = &'a WorkoutLogEntry>) -> PersonalBests {
    let mut bests = PersonalBests::default();
    for entry in entries {
        if entry.muscle_group.is_load_bearing() && entry.weight > 0.0 {
            bests.observe(entry);
        }
    }
    bests
}
