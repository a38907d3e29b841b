// ABOUTME: Main library entry point for the liftlog workout tracker
// ABOUTME: Wires storage, configuration, logging, planning and session recording around the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog
//!
//! A personal workout log with derived statistics and a weekly planner.
//!
//! ## Features
//!
//! - **Workout logging**: Record strength, cardio and stretch sessions
//! - **Analytics**: Personal bests, muscle split, leaderboard and profile summary
//! - **Weekly planning**: Seven day slots with planned exercises and a "today" lookup
//! - **Coins**: A fixed reward credited per recorded session
//!
//! ## Architecture
//!
//! - **`liftlog-core`**: Data model, exercise taxonomy and the weekly plan state machine
//! - **`liftlog-intelligence`**: Pure aggregation over a log snapshot
//! - **Database plugins**: Async storage trait with memory and JSON file backends
//! - **Planner / session recorder**: Load-edit-save and append paths on top of storage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlog::config::LiftlogConfig;
//! use liftlog::database_plugins::Database;
//! use liftlog::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = LiftlogConfig::from_env()?;
//!     let database = Database::new(&config.database_url).await?;
//!     println!("Using {}", database.backend_info());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Storage backends
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Analytics re-exports
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data model re-exports
pub mod models;

/// Weekly plan sessions
pub mod planner;

/// Append path for workout sessions
pub mod session_recorder;
