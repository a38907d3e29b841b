// ABOUTME: Shared test utilities and fixtures for liftlog integration tests
// ABOUTME: Provides quiet logging setup, fixed clocks and log entry builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `liftlog`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftlog::database_plugins::MemoryStore;
use liftlog::models::{EntryMetrics, LogSnapshot, MuscleGroup, UserSummary, WorkoutLogEntry};

static INIT_LOGGER: Once = Once::new();

pub const ALICE: &str = "alice@example.com";
pub const BOB: &str = "bob@example.com";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "now" used by date-sensitive tests: Wednesday 2025-06-11 12:00 UTC
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 11, 12, 0, 0).unwrap()
}

/// Timestamp `days` before `test_now()`
pub fn days_ago(days: i64) -> DateTime<Utc> {
    test_now() - Duration::days(days)
}

/// Strength entry logged at `test_now()`
pub fn strength_entry(
    user: &str,
    exercise: &str,
    muscle_group: &str,
    weight: f64,
) -> WorkoutLogEntry {
    WorkoutLogEntry::from_metrics(
        user,
        exercise,
        MuscleGroup::from(muscle_group),
        EntryMetrics::Strength {
            sets: 3,
            reps: 10,
            weight,
        },
        test_now(),
    )
}

/// Cardio entry logged at `test_now()`
pub fn cardio_entry(
    user: &str,
    exercise: &str,
    minutes: u32,
    distance: Option<f64>,
) -> WorkoutLogEntry {
    WorkoutLogEntry::from_metrics(
        user,
        exercise,
        MuscleGroup::Cardio,
        EntryMetrics::Cardio { minutes, distance },
        test_now(),
    )
}

/// Stretch entry logged at `test_now()`
pub fn stretch_entry(user: &str, exercise: &str, minutes: u32) -> WorkoutLogEntry {
    WorkoutLogEntry::from_metrics(
        user,
        exercise,
        MuscleGroup::Flexibility,
        EntryMetrics::Stretch { minutes },
        test_now(),
    )
}

/// The three-entry log used throughout the analytics tests
pub fn scenario_snapshot() -> LogSnapshot {
    LogSnapshot::new(
        vec![
            strength_entry(ALICE, "Bench Press", "Chest", 60.0),
            strength_entry(ALICE, "Bench Press", "Chest", 80.0),
            strength_entry(BOB, "Squat", "Legs", 100.0),
        ],
        vec![UserSummary::new(ALICE).with_display_name("Alice")],
    )
}

/// Fresh in-memory store with test logging enabled
pub fn create_test_store() -> MemoryStore {
    init_test_logging();
    MemoryStore::new()
}
