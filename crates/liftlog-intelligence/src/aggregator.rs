// ABOUTME: Analytics aggregator combining every derived statistic for a user
// ABOUTME: Filters the snapshot to the current user and assembles DerivedStats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use liftlog_core::models::LogSnapshot;
use serde::Serialize;
use tracing::debug;

use crate::config::AggregatorConfig;
use crate::leaderboard::{leaderboard, LeaderboardEntry};
use crate::muscle_split::{muscle_split, MuscleSplit};
use crate::personal_bests::{personal_bests, PersonalBests};
use crate::profile::{profile_summary, ProfileSummary};

/// Everything derived from a log snapshot for one viewer
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    /// Heaviest load per load-bearing exercise (current user)
    pub personal_bests: PersonalBests,
    /// Entry counts per tracked muscle group (current user)
    pub muscle_split: MuscleSplit,
    /// Entry counts per user, all users, descending
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Profile totals (current user)
    pub profile: ProfileSummary,
}

/// Stateless aggregator over log snapshots
#[derive(Debug, Clone, Default)]
pub struct AnalyticsAggregator {
    config: AggregatorConfig,
}

impl AnalyticsAggregator {
    /// Create an aggregator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with custom settings
    #[must_use]
    pub const fn with_config(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Derive statistics for `current_user` as of `now`
    ///
    /// Without a current user the result is empty. An empty log yields zeroed
    /// statistics. Neither case is an error.
    #[must_use]
    pub fn aggregate(
        &self,
        snapshot: &LogSnapshot,
        current_user: Option<&str>,
        now: DateTime<Utc>,
    ) -> DerivedStats {
        let Some(email) = current_user.map(str::trim).filter(|email| !email.is_empty()) else {
            debug!("No current user, returning empty statistics");
            return DerivedStats::default();
        };

        let stats = DerivedStats {
            personal_bests: personal_bests(snapshot.entries_for(email)),
            muscle_split: muscle_split(snapshot.entries_for(email)),
            leaderboard: leaderboard(&snapshot.log_entries, &snapshot.users),
            profile: profile_summary(
                snapshot.entries_for(email),
                now,
                self.config.trailing_window(),
            ),
        };
        debug!(
            user = email,
            entries = snapshot.log_entries.len(),
            own_entries = stats.profile.total_workouts,
            "Aggregated workout statistics"
        );
        stats
    }
}
