// ABOUTME: Database factory selecting a storage backend from a URL
// ABOUTME: Wraps the memory and JSON file stores in one enum that delegates the storage trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Database factory for creating storage backends
//!
//! This module detects the backend from the connection string and creates it.
//! `memory:` selects the in-memory store, `file:<path>` the JSON file store.

use async_trait::async_trait;
use liftlog_core::models::{CoinBalance, LogSnapshot, UserSummary, WorkoutLogEntry};
use tracing::{debug, info};
use uuid::Uuid;

use super::json_file::JsonFileStore;
use super::memory::MemoryStore;
use super::FitnessStore;
use crate::constants::{env_config, storage};
use crate::errors::{AppError, AppResult};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Process-local storage, lost on exit
    Memory,
    /// Single JSON document on disk
    JsonFile,
}

/// Storage instance wrapper that delegates to the selected backend
#[derive(Debug, Clone)]
pub enum Database {
    /// In-memory backend
    Memory(MemoryStore),
    /// JSON file backend
    JsonFile(JsonFileStore),
}

impl Database {
    /// Create a backend from a storage URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported URL, or the backend's
    /// error if it cannot be opened
    pub async fn new(database_url: &str) -> AppResult<Self> {
        debug!("Detecting storage backend from URL: {database_url}");
        let db_type = detect_database_type(database_url)?;
        info!("Detected storage backend: {db_type:?}");

        match db_type {
            DatabaseType::Memory => Ok(Self::Memory(MemoryStore::new())),
            DatabaseType::JsonFile => {
                let path = database_url
                    .strip_prefix(storage::FILE_SCHEME)
                    .unwrap_or(database_url);
                let store = JsonFileStore::open(path).await?;
                info!(path = %store.path().display(), "JSON file store opened");
                Ok(Self::JsonFile(store))
            }
        }
    }

    /// Descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (ephemeral)",
            Self::JsonFile(_) => "JSON file (local)",
        }
    }

    /// The backend type
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::Memory(_) => DatabaseType::Memory,
            Self::JsonFile(_) => DatabaseType::JsonFile,
        }
    }
}

/// Detect the backend type from a storage URL
///
/// # Errors
///
/// Returns a configuration error if the URL uses neither `memory:` nor
/// `file:<path>`
pub fn detect_database_type(database_url: &str) -> AppResult<DatabaseType> {
    if database_url == storage::MEMORY_SCHEME {
        return Ok(DatabaseType::Memory);
    }
    match database_url.strip_prefix(storage::FILE_SCHEME) {
        Some(path) if !path.trim().is_empty() => Ok(DatabaseType::JsonFile),
        Some(_) => Err(AppError::config_invalid(
            env_config::DATABASE_URL,
            database_url,
            "file URL is missing a path",
        )),
        None => Err(AppError::config_invalid(
            env_config::DATABASE_URL,
            database_url,
            "supported formats: memory:, file:path/to/liftlog.json",
        )),
    }
}

#[async_trait]
impl FitnessStore for Database {
    fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(db) => db.backend_name(),
            Self::JsonFile(db) => db.backend_name(),
        }
    }

    async fn load_snapshot(&self) -> AppResult<LogSnapshot> {
        match self {
            Self::Memory(db) => db.load_snapshot().await,
            Self::JsonFile(db) => db.load_snapshot().await,
        }
    }

    async fn append_entries(&self, entries: Vec<WorkoutLogEntry>) -> AppResult<Vec<Uuid>> {
        match self {
            Self::Memory(db) => db.append_entries(entries).await,
            Self::JsonFile(db) => db.append_entries(entries).await,
        }
    }

    async fn append_session(
        &self,
        email: &str,
        entries: Vec<WorkoutLogEntry>,
        reward: u64,
    ) -> AppResult<(Vec<Uuid>, CoinBalance)> {
        match self {
            Self::Memory(db) => db.append_session(email, entries, reward).await,
            Self::JsonFile(db) => db.append_session(email, entries, reward).await,
        }
    }

    async fn delete_entry(&self, id: Uuid) -> AppResult<bool> {
        match self {
            Self::Memory(db) => db.delete_entry(id).await,
            Self::JsonFile(db) => db.delete_entry(id).await,
        }
    }

    async fn upsert_user(&self, user: UserSummary) -> AppResult<()> {
        match self {
            Self::Memory(db) => db.upsert_user(user).await,
            Self::JsonFile(db) => db.upsert_user(user).await,
        }
    }

    async fn load_plan_blob(&self, email: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(db) => db.load_plan_blob(email).await,
            Self::JsonFile(db) => db.load_plan_blob(email).await,
        }
    }

    async fn save_plan_blob(&self, email: &str, blob: String) -> AppResult<()> {
        match self {
            Self::Memory(db) => db.save_plan_blob(email, blob).await,
            Self::JsonFile(db) => db.save_plan_blob(email, blob).await,
        }
    }

    async fn coin_balance(&self, email: &str) -> AppResult<CoinBalance> {
        match self {
            Self::Memory(db) => db.coin_balance(email).await,
            Self::JsonFile(db) => db.coin_balance(email).await,
        }
    }

    async fn set_coin_balance(&self, email: &str, balance: CoinBalance) -> AppResult<()> {
        match self {
            Self::Memory(db) => db.set_coin_balance(email, balance).await,
            Self::JsonFile(db) => db.set_coin_balance(email, balance).await,
        }
    }

    async fn credit_coins(&self, email: &str, reward: u64) -> AppResult<CoinBalance> {
        match self {
            Self::Memory(db) => db.credit_coins(email, reward).await,
            Self::JsonFile(db) => db.credit_coins(email, reward).await,
        }
    }
}
