// ABOUTME: Command modules and shared execution context for the liftlog CLI
// ABOUTME: Holds the opened storage backend, resolved configuration and acting user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

pub mod log;
pub mod plan;
pub mod stats;

use liftlog::{
    config::LiftlogConfig,
    database_plugins::Database,
    errors::{AppError, AppResult},
};

/// Everything a command needs to run
pub struct CommandContext {
    pub database: Database,
    pub config: LiftlogConfig,
    pub user: Option<String>,
    pub json: bool,
}

impl CommandContext {
    pub const fn new(
        database: Database,
        config: LiftlogConfig,
        user: Option<String>,
        json: bool,
    ) -> Self {
        Self {
            database,
            config,
            user,
            json,
        }
    }

    /// Acting user, required by every per-user command
    pub fn user(&self) -> AppResult<&str> {
        self.user
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or_else(|| {
                AppError::invalid_input("no user given; pass --user or set LIFTLOG_USER")
            })
    }
}
