// ABOUTME: Intelligence module re-exports from the liftlog-intelligence crate
// ABOUTME: Exposes the analytics aggregator under crate::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Intelligence Module
//!
//! Derived statistics over the workout log: personal bests, muscle split,
//! leaderboard and profile summary.

// Re-export all public items from liftlog-intelligence
pub use liftlog_intelligence::*;

