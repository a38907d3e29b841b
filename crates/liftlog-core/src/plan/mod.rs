// ABOUTME: Weekly plan store module
// ABOUTME: Re-exports day names, day slots and the weekly plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Weekly Plan Store
//!
//! Each of the seven days is either REST or WORKOUT:
//!
//! - `toggle_day` flips the state and always clears the exercise list
//! - `set_day_type` is allowed in either state and keeps the exercise list
//! - `add_exercise` requires WORKOUT
//! - `update_exercise` / `remove_exercise` require a valid index
//!
//! Plans persist as a JSON object keyed by day name. Decoding is strict:
//! anything short of a complete, consistent week is a corrupt plan.

mod day;
mod week;

pub use day::DayOfWeek;
pub use week::{DaySlot, WeeklyPlan};
