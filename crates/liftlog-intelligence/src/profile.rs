// ABOUTME: Profile summary metrics for a single user's workout history
// ABOUTME: Totals, trailing-week count, exercise histogram and favorite exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use liftlog_core::models::WorkoutLogEntry;
use serde::{Deserialize, Serialize};

/// Summary shown on a user's profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    /// Number of entries the user has logged
    pub total_workouts: u32,
    /// Entries logged inside the trailing window
    pub this_week_count: u32,
    /// Entry count per exercise name
    pub favorite_exercise_histogram: BTreeMap<String, u32>,
    /// Most frequent exercise; ties go to the one logged first
    pub favorite_exercise: Option<String>,
    /// Raw sum of the `weight` field over all entries
    ///
    /// Cardio distance is stored in `weight`, so it is included here.
    pub total_weight_moved: f64,
    /// Minutes of cardio and stretching
    pub total_minutes: u64,
    /// Distance covered in cardio entries
    pub total_distance: f64,
}

impl ProfileSummary {
    /// Most frequent exercise with its count
    #[must_use]
    pub fn favorite(&self) -> Option<(&str, u32)> {
        let name = self.favorite_exercise.as_deref()?;
        self.favorite_exercise_histogram
            .get(name)
            .map(|count| (name, *count))
    }
}

/// Summarize one user's entries relative to `now`
///
/// An entry is in the trailing window when `created_at >= now - window`.
pub fn profile_summary<'a>(
    entries: impl IntoIterator<Item = &'a WorkoutLogEntry>,
    now: DateTime<Utc>,
    window: Duration,
) -> ProfileSummary {
    let window_start = now.checked_sub_signed(window);
    let mut summary = ProfileSummary::default();
    let mut first_seen: Vec<&str> = Vec::new();

    for entry in entries {
        summary.total_workouts = summary.total_workouts.saturating_add(1);
        if window_start.map_or(true, |start| entry.created_at >= start) {
            summary.this_week_count = summary.this_week_count.saturating_add(1);
        }

        let count = summary
            .favorite_exercise_histogram
            .entry(entry.exercise_name.clone())
            .or_insert(0);
        if *count == 0 {
            first_seen.push(&entry.exercise_name);
        }
        *count = count.saturating_add(1);

        summary.total_weight_moved += entry.weight;
        let metrics = entry.metrics();
        if let Some(minutes) = metrics.minutes() {
            summary.total_minutes = summary.total_minutes.saturating_add(u64::from(minutes));
        }
        if let Some(distance) = metrics.distance() {
            summary.total_distance += distance;
        }
    }

    summary.favorite_exercise = favorite(&first_seen, &summary.favorite_exercise_histogram);
    summary
}

fn favorite(first_seen: &[&str], histogram: &BTreeMap<String, u32>) -> Option<String> {
    let mut best: Option<(&str, u32)> = None;
    for &name in first_seen {
        let count = histogram.get(name).copied().unwrap_or(0);
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_owned())
}
