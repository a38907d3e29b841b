// ABOUTME: Errors raised by weekly plan store operations
// ABOUTME: Covers bounds violations, rest-day edits, unknown days and corrupt blobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use thiserror::Error;

use crate::plan::DayOfWeek;

/// Errors produced while editing or loading a weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// An exercise index was outside `0..len` for the day
    #[error("exercise index {index} is out of range for {day} ({len} planned)")]
    IndexOutOfRange {
        /// Day whose exercise list was addressed
        day: DayOfWeek,
        /// Requested index
        index: usize,
        /// Number of exercises currently planned for the day
        len: usize,
    },

    /// The day is a rest day, so it cannot take planned exercises
    #[error("{day} is not in workout state")]
    DayNotWorkout {
        /// Day that was addressed
        day: DayOfWeek,
    },

    /// A weekday name did not match any of the seven known days
    #[error("unknown day name: {0}")]
    UnknownDay(String),

    /// A persisted plan blob could not be decoded into a full week
    #[error("corrupt plan: {0}")]
    CorruptPlan(String),
}

impl PlanError {
    /// Create a "corrupt plan" error
    #[must_use]
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptPlan(reason.into())
    }

    /// Whether the caller may reasonably respond by resetting to a default plan
    #[must_use]
    pub const fn is_corrupt_plan(&self) -> bool {
        matches!(self, Self::CorruptPlan(_))
    }
}
