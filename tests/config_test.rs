// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates defaults, overrides and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use liftlog::config::LiftlogConfig;
use liftlog::constants::env_config;
use liftlog::errors::ErrorCode;
use liftlog::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const ALL_VARS: [&str; 4] = [
    env_config::DATABASE_URL,
    env_config::COIN_REWARD,
    env_config::TRAILING_WINDOW_DAYS,
    env_config::USER,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = LiftlogConfig::from_env().unwrap();

    assert!(config.database_url.starts_with("file:"));
    assert!(config.database_url.ends_with("liftlog.json"));
    assert_eq!(config.coin_reward, 10);
    assert_eq!(config.analytics.trailing_window_days, 7);
    assert_eq!(config.default_user, None);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_config::DATABASE_URL, "memory:");
    env::set_var(env_config::COIN_REWARD, " 25 ");
    env::set_var(env_config::TRAILING_WINDOW_DAYS, "14");
    env::set_var(env_config::USER, "  alice@example.com ");

    let config = LiftlogConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.database_url, "memory:");
    assert_eq!(config.coin_reward, 25);
    assert_eq!(config.analytics.trailing_window_days, 14);
    assert_eq!(config.default_user.as_deref(), Some("alice@example.com"));
}

#[test]
#[serial]
fn test_blank_user_is_ignored() {
    clear_env();
    env::set_var(env_config::USER, "   ");

    let config = LiftlogConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.default_user, None);
}

#[test]
#[serial]
fn test_invalid_numbers_are_config_errors() {
    clear_env();
    env::set_var(env_config::COIN_REWARD, "ten");
    let reward = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    env::set_var(env_config::COIN_REWARD, "-1");
    let negative_reward = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    env::set_var(env_config::TRAILING_WINDOW_DAYS, "-3");
    let window = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(reward.code, ErrorCode::ConfigInvalid);
    assert_eq!(
        reward.context.resource_id.as_deref(),
        Some(env_config::COIN_REWARD)
    );
    assert_eq!(negative_reward.code, ErrorCode::ConfigInvalid);
    assert_eq!(window.code, ErrorCode::ConfigInvalid);
    assert_eq!(
        window.context.resource_id.as_deref(),
        Some(env_config::TRAILING_WINDOW_DAYS)
    );
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "liftlog=trace");
    env::set_var("SERVICE_NAME", "liftlog-test");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "liftlog=trace");
    assert_eq!(config.service_name, "liftlog-test");
    assert_eq!(config.verbose().level, "debug");
}

#[test]
#[serial]
fn test_logging_defaults_are_quiet_and_compact() {
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, "warn");
    assert!(!config.include_location);
}
