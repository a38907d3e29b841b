// ABOUTME: Muscle-group distribution of a user's logged entries
// ABOUTME: Counts entries per tracked bucket and drops unrecognized groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use liftlog_core::models::{MuscleGroup, WorkoutLogEntry};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Entry counts for the seven tracked muscle groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MuscleSplit {
    counts: [u32; 7],
}

impl MuscleSplit {
    /// Count for a muscle group; always 0 for untracked groups
    #[must_use]
    pub fn get(&self, group: &MuscleGroup) -> u32 {
        Self::bucket(group).map_or(0, |index| self.counts[index])
    }

    /// Buckets with their counts in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&'static MuscleGroup, u32)> + '_ {
        TRACKED_GROUPS.iter().zip(self.counts.iter().copied())
    }

    /// Sum of all bucket counts
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn bucket(group: &MuscleGroup) -> Option<usize> {
        TRACKED_GROUPS.iter().position(|tracked| tracked == group)
    }

    fn record(&mut self, group: &MuscleGroup) {
        if let Some(index) = Self::bucket(group) {
            self.counts[index] = self.counts[index].saturating_add(1);
        }
    }
}

static TRACKED_GROUPS: [MuscleGroup; 7] = MuscleGroup::TRACKED;

impl Serialize for MuscleSplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (group, count) in self.iter() {
            map.serialize_entry(group.label(), &count)?;
        }
        map.end()
    }
}

/// Distribute one user's entries across the tracked muscle groups
pub fn muscle_split<'a>(entries: impl IntoIterator<Item = &'a WorkoutLogEntry>) -> MuscleSplit {
    let mut split = MuscleSplit::default();
    for entry in entries {
        split.record(&entry.muscle_group);
    }
    split
}
