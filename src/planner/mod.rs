// ABOUTME: Weekly planning for one user session on top of the core plan store
// ABOUTME: Loads a persisted plan, applies edits, and saves explicitly through a store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Planner
//!
//! `WeeklyPlan` in `liftlog-core` is a plain in-memory state machine. This
//! module owns the per-user session around it: loading the persisted blob,
//! tracking unsaved edits, and building a workout session from today's slot.

/// Plan session owned by one user
pub mod session;

pub use liftlog_core::plan::{DayOfWeek, DaySlot, WeeklyPlan};
pub use session::PlanSession;
