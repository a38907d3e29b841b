// ABOUTME: Configuration module for liftlog
// ABOUTME: Re-exports the environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Configuration module
//!
//! - **Environment**: storage URL, coin reward and analytics window

/// Environment configuration
pub mod environment;

pub use environment::LiftlogConfig;
