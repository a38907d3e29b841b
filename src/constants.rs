// ABOUTME: Application constants for liftlog
// ABOUTME: Re-exports core constants and adds environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Constants module

pub use liftlog_core::constants::{analytics, muscle_groups, rewards, service_names};

/// Environment variable names read by `LiftlogConfig::from_env`
pub mod env_config {
    /// Storage backend URL
    pub const DATABASE_URL: &str = "LIFTLOG_DATABASE_URL";
    /// Coins per recorded session
    pub const COIN_REWARD: &str = "LIFTLOG_COIN_REWARD";
    /// Trailing window length in days
    pub const TRAILING_WINDOW_DAYS: &str = "LIFTLOG_TRAILING_WINDOW_DAYS";
    /// Default acting user for the CLI
    pub const USER: &str = "LIFTLOG_USER";
}

/// Storage URL schemes
pub mod storage {
    /// In-memory store
    pub const MEMORY_SCHEME: &str = "memory:";
    /// JSON file store
    pub const FILE_SCHEME: &str = "file:";
}
