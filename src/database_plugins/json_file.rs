// ABOUTME: JSON file storage backend used by the CLI
// ABOUTME: Loads one document at open time and rewrites it atomically on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use liftlog_core::models::{CoinBalance, LogSnapshot, UserSummary, WorkoutLogEntry};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::document::StoreDocument;
use super::FitnessStore;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Store backed by a single JSON document on disk
///
/// The document is read once when the store opens. Each mutation updates the
/// cached copy and rewrites the file through a temporary sibling followed by
/// a rename, so a crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    document: Arc<RwLock<StoreDocument>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write. Entries stored without an id get a fresh one, and the
    /// file is rewritten so the ids stay stable across runs.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or rewritten, or a
    /// serialization error if it does not contain a store document
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let mut document: StoreDocument = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => StoreDocument::default(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::from(e).with_resource_id(path.display().to_string())
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file not found, starting empty");
                StoreDocument::default()
            }
            Err(e) => return Err(AppError::from(e).with_resource_id(path.display().to_string())),
        };

        let assigned = document.assign_missing_ids();
        let store = Self {
            path,
            document: Arc::new(RwLock::new(document)),
        };
        if assigned > 0 {
            info!(
                path = %store.path.display(),
                assigned,
                "Assigned ids to stored entries that had none"
            );
            let document = store.document.read().await.clone();
            store.persist(&document, "assign_missing_ids").await?;
        }
        Ok(store)
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, document: &StoreDocument, operation: &str) -> AppResult<()> {
        let started = Instant::now();
        let result = self.write_atomically(document).await;
        AppLogger::log_store_operation(
            self.backend_name(),
            operation,
            result.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        result
    }

    async fn write_atomically(&self, document: &StoreDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(document)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, payload).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }

    async fn mutate<T: Send>(
        &self,
        operation: &str,
        change: impl FnOnce(&mut StoreDocument) -> T + Send,
    ) -> AppResult<T> {
        let mut document = self.document.write().await;
        let mut updated = document.clone();
        let output = change(&mut updated);
        self.persist(&updated, operation).await?;
        *document = updated;
        Ok(output)
    }
}

#[async_trait]
impl FitnessStore for JsonFileStore {
    fn backend_name(&self) -> &'static str {
        "json_file"
    }

    async fn load_snapshot(&self) -> AppResult<LogSnapshot> {
        Ok(self.document.read().await.snapshot())
    }

    async fn append_entries(&self, entries: Vec<WorkoutLogEntry>) -> AppResult<Vec<Uuid>> {
        self.mutate("append_entries", |document| document.append(entries))
            .await
    }

    async fn append_session(
        &self,
        email: &str,
        entries: Vec<WorkoutLogEntry>,
        reward: u64,
    ) -> AppResult<(Vec<Uuid>, CoinBalance)> {
        self.mutate("append_session", |document| {
            document.append_session(email, entries, reward)
        })
        .await
    }

    async fn delete_entry(&self, id: Uuid) -> AppResult<bool> {
        if !self
            .document
            .read()
            .await
            .log_entries
            .iter()
            .any(|entry| entry.id == id)
        {
            return Ok(false);
        }
        self.mutate("delete_entry", |document| document.delete(id))
            .await
    }

    async fn upsert_user(&self, user: UserSummary) -> AppResult<()> {
        self.mutate("upsert_user", |document| document.upsert_user(user))
            .await
    }

    async fn load_plan_blob(&self, email: &str) -> AppResult<Option<String>> {
        Ok(self.document.read().await.plans.get(email).cloned())
    }

    async fn save_plan_blob(&self, email: &str, blob: String) -> AppResult<()> {
        let email = email.to_owned();
        self.mutate("save_plan_blob", |document| {
            document.plans.insert(email, blob);
        })
        .await
    }

    async fn coin_balance(&self, email: &str) -> AppResult<CoinBalance> {
        Ok(self.document.read().await.coins_for(email))
    }

    async fn set_coin_balance(&self, email: &str, balance: CoinBalance) -> AppResult<()> {
        let email = email.to_owned();
        self.mutate("set_coin_balance", |document| {
            document.coins.insert(email, balance);
        })
        .await
    }

    async fn credit_coins(&self, email: &str, reward: u64) -> AppResult<CoinBalance> {
        self.mutate("credit_coins", |document| document.credit(email, reward))
            .await
    }
}
