// ABOUTME: Constants shared by the liftlog crates
// ABOUTME: Reward sizes, analytics windows, and muscle-group labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Gamification rewards
pub mod rewards {
    /// Coins credited for each successfully recorded workout session
    pub const COINS_PER_SESSION: u64 = 10;
}

/// Analytics defaults
pub mod analytics {
    /// Length of the trailing window used for "this week" counts
    pub const TRAILING_WINDOW_DAYS: i64 = 7;
}

/// Display labels for muscle-group buckets
pub mod muscle_groups {
    /// Chest bucket
    pub const CHEST: &str = "Chest";
    /// Legs bucket
    pub const LEGS: &str = "Legs";
    /// Back bucket
    pub const BACK: &str = "Back";
    /// Shoulders bucket
    pub const SHOULDERS: &str = "Shoulders";
    /// Arms bucket
    pub const ARMS: &str = "Arms";
    /// Cardio bucket
    pub const CARDIO: &str = "Cardio";
    /// Flexibility bucket
    pub const FLEXIBILITY: &str = "Flexibility";
    /// Fallback label for anything outside the tracked buckets
    pub const OTHER: &str = "Other";
}

/// Service identity used in logs
pub mod service_names {
    /// Name of the liftlog service
    pub const LIFTLOG: &str = "liftlog";
}
