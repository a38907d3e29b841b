// ABOUTME: Settings for the analytics aggregator
// ABOUTME: Currently the length of the trailing "this week" window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::Duration;
use liftlog_core::constants::analytics::TRAILING_WINDOW_DAYS;
use serde::{Deserialize, Serialize};

/// Aggregator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Days covered by the trailing-week count (lower bound inclusive)
    pub trailing_window_days: i64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            trailing_window_days: TRAILING_WINDOW_DAYS,
        }
    }
}

impl AggregatorConfig {
    /// Trailing window as a duration; negative lengths count as zero
    #[must_use]
    pub fn trailing_window(&self) -> Duration {
        Duration::try_days(self.trailing_window_days.max(0)).unwrap_or(Duration::MAX)
    }
}
