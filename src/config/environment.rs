// ABOUTME: Environment configuration for the liftlog application
// ABOUTME: Reads storage location, coin reward and analytics window from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Environment-based configuration
//!
//! Configuration is environment-only; there is no config file.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use liftlog_intelligence::AggregatorConfig;
use tracing::debug;

use crate::constants::{analytics, env_config, rewards};
use crate::errors::{AppError, AppResult};

/// Application configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftlogConfig {
    /// Storage backend URL (`memory:` or `file:<path>`)
    pub database_url: String,
    /// Coins credited per recorded session
    pub coin_reward: u64,
    /// Analytics settings
    pub analytics: AggregatorConfig,
    /// User the CLI acts for when `--user` is not given
    pub default_user: Option<String>,
}

impl Default for LiftlogConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            coin_reward: rewards::COINS_PER_SESSION,
            analytics: AggregatorConfig::default(),
            default_user: None,
        }
    }
}

impl LiftlogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a numeric variable does not parse or the
    /// trailing window is negative
    pub fn from_env() -> AppResult<Self> {
        let database_url =
            env::var(env_config::DATABASE_URL).unwrap_or_else(|_| default_database_url());
        let coin_reward = parse_env(env_config::COIN_REWARD, rewards::COINS_PER_SESSION)?;
        let trailing_window_days =
            parse_env(env_config::TRAILING_WINDOW_DAYS, analytics::TRAILING_WINDOW_DAYS)?;
        if trailing_window_days < 0 {
            return Err(AppError::config_invalid(
                env_config::TRAILING_WINDOW_DAYS,
                &trailing_window_days.to_string(),
                "must not be negative",
            ));
        }
        let default_user = env::var(env_config::USER)
            .ok()
            .map(|user| user.trim().to_owned())
            .filter(|user| !user.is_empty());

        let config = Self {
            database_url,
            coin_reward,
            analytics: AggregatorConfig {
                trailing_window_days,
            },
            default_user,
        };
        debug!(
            database_url = %config.database_url,
            coin_reward = config.coin_reward,
            trailing_window_days,
            "Loaded liftlog configuration"
        );
        Ok(config)
    }
}

/// Default storage: a JSON file in the platform data directory
fn default_database_url() -> String {
    let path = dirs::data_dir().map_or_else(
        || PathBuf::from("liftlog.json"),
        |dir| dir.join("liftlog").join("liftlog.json"),
    );
    format!("file:{}", path.display())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config_invalid(key, &raw, "not a valid number")),
        Err(_) => Ok(default),
    }
}
