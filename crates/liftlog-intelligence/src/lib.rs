// ABOUTME: Workout analytics engine deriving statistics from a log snapshot
// ABOUTME: Pure, deterministic aggregation safe to run on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! Turns the raw workout log into derived statistics. Nothing here is stored:
//! every value is recomputed from the snapshot the caller supplies, and no
//! input makes aggregation fail. Malformed entries have already been
//! defaulted by the log-entry decoder.
//!
//! ## Modules
//!
//! - **personal_bests**: Heaviest load per load-bearing exercise
//! - **muscle_split**: Entry counts across the seven tracked muscle groups
//! - **leaderboard**: Cross-user entry counts with display labels
//! - **profile**: Per-user totals, trailing-week count and favorite exercise
//! - **aggregator**: Combines all of the above into `DerivedStats`

/// Combined aggregation entry point
pub mod aggregator;

/// Aggregation settings
pub mod config;

/// Cross-user leaderboard
pub mod leaderboard;

/// Muscle-group distribution
pub mod muscle_split;

/// Personal-best tables
pub mod personal_bests;

/// Profile summary metrics
pub mod profile;

pub use aggregator::{AnalyticsAggregator, DerivedStats};
pub use config::AggregatorConfig;
pub use leaderboard::{display_label, leaderboard, LeaderboardEntry};
pub use muscle_split::{muscle_split, MuscleSplit};
pub use personal_bests::{personal_bests, PersonalBest, PersonalBests};
pub use profile::{profile_summary, ProfileSummary};
