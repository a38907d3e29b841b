// ABOUTME: Core types and constants for the liftlog workout tracker
// ABOUTME: Foundation crate with log entries, taxonomy, weekly plans and domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Foundation crate providing shared types for the liftlog workout tracker.
//! Both the analytics engine and the application crate build on it, and it
//! carries no I/O of its own.
//!
//! ## Modules
//!
//! - **models**: Workout log entries, exercise entries, sessions and coin balances
//! - **taxonomy**: Static exercise catalogue mapping names to muscle groups
//! - **plan**: The per-user weekly plan and its day-slot state machine
//! - **errors**: Domain errors for plan editing and exercise validation
//! - **constants**: Fixed values shared across the workspace

/// Fixed values shared across the workspace
pub mod constants;

/// Domain error types (`PlanError`, `ValidationError`)
pub mod errors;

/// Core data models (log entries, exercise entries, sessions, coins)
pub mod models;

/// Weekly plan store with per-day rest/workout state
pub mod plan;

/// Static exercise taxonomy keyed by workout type
pub mod taxonomy;
