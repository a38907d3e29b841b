// ABOUTME: Domain error types for the liftlog core crate
// ABOUTME: Plan editing failures and exercise field validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Domain Errors
//!
//! - `PlanError` - failures raised by weekly plan operations
//! - `ValidationError` - exercise entries missing fields their type requires
//!
//! Both are local to the operation that raised them. The application crate
//! converts them into its unified error type.

mod plan;
mod validation;

pub use plan::PlanError;
pub use validation::ValidationError;
