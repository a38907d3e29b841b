// ABOUTME: Logging configuration and structured logging setup for the liftlog CLI and library
// ABOUTME: Configures log levels, formatters, and output destinations via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Structured logging configuration
//!
//! Log lines go to stderr so that command output on stdout stays machine
//! readable.

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive CLI use
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::LIFTLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Raise the level to `debug` (CLI `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter =
            EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("warn"));

        let registry = tracing_subscriber::registry().with(env_filter);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans,
            }
        });
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            "Logging configured: {config_summary}"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a recorded workout session
    pub fn log_session_recorded(user_email: &str, entries: usize, coins: u64) {
        info!(
            user.email = %user_email,
            session.entries = entries,
            coins.balance = coins,
            "Workout session recorded"
        );
    }

    /// Log an explicit weekly plan save
    pub fn log_plan_saved(user_email: &str, workout_days: usize) {
        info!(
            user.email = %user_email,
            plan.workout_days = workout_days,
            "Weekly plan saved"
        );
    }

    /// Log a corrupt plan blob being replaced by the default plan
    pub fn log_plan_reset(user_email: &str, reason: &str) {
        warn!(
            user.email = %user_email,
            plan.reset_reason = %reason,
            "Weekly plan reset to default"
        );
    }

    /// Log a storage backend operation
    pub fn log_store_operation(backend: &str, operation: &str, success: bool, duration_ms: u64) {
        debug!(
            store.backend = %backend,
            store.operation = %operation,
            store.success = success,
            store.duration_ms = duration_ms,
            "Store operation"
        );
    }
}
