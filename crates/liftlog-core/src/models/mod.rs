// ABOUTME: Core data models for the liftlog workout tracker
// ABOUTME: Re-exports log entries, exercise shapes, sessions and coin balances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Data Models
//!
//! - `WorkoutLogEntry`: one persisted exercise record (immutable once stored)
//! - `EntryMetrics`: typed view over a log entry's overloaded metric fields
//! - `PlannedExercise` / `ExerciseEntry`: loose plan shape and validated entry shape
//! - `WorkoutSession`: the append request produced when a user finishes a workout
//! - `UserSummary` / `LogSnapshot`: read-only inputs to the analytics engine
//! - `CoinBalance`: gamification counter

mod exercise;
mod log_entry;
mod rewards;
mod session;
mod workout;

pub use exercise::{ExerciseEntry, PlannedExercise};
pub use log_entry::{EntryMetrics, LogSnapshot, UserSummary, WorkoutLogEntry};
pub use rewards::CoinBalance;
pub use session::WorkoutSession;
pub use workout::{MuscleGroup, WorkoutType};
