// ABOUTME: Data model re-exports from the liftlog-core crate
// ABOUTME: Keeps crate::models paths stable for the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Data Models
//!
//! Log entries, exercises, sessions and coin balances live in `liftlog-core`
//! so the analytics crate can depend on them without the storage layer.

pub use liftlog_core::models::*;
pub use liftlog_core::taxonomy::{ExerciseTaxonomy, TaxonomyEntry};
