// ABOUTME: In-memory storage backend for tests and ephemeral sessions
// ABOUTME: Keeps the whole store document behind a shared async read-write lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::sync::Arc;

use async_trait::async_trait;
use liftlog_core::models::{CoinBalance, LogSnapshot, UserSummary, WorkoutLogEntry};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::document::StoreDocument;
use super::FitnessStore;
use crate::errors::AppResult;

/// In-memory store; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<RwLock<StoreDocument>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with a document
    ///
    /// Entries without an id get a fresh one.
    #[must_use]
    pub fn with_document(mut document: StoreDocument) -> Self {
        document.assign_missing_ids();
        Self {
            document: Arc::new(RwLock::new(document)),
        }
    }

    /// Copy of the current document
    pub async fn document(&self) -> StoreDocument {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load_snapshot(&self) -> AppResult<LogSnapshot> {
        Ok(self.document.read().await.snapshot())
    }

    async fn append_entries(&self, entries: Vec<WorkoutLogEntry>) -> AppResult<Vec<Uuid>> {
        Ok(self.document.write().await.append(entries))
    }

    async fn append_session(
        &self,
        email: &str,
        entries: Vec<WorkoutLogEntry>,
        reward: u64,
    ) -> AppResult<(Vec<Uuid>, CoinBalance)> {
        Ok(self
            .document
            .write()
            .await
            .append_session(email, entries, reward))
    }

    async fn delete_entry(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.document.write().await.delete(id))
    }

    async fn upsert_user(&self, user: UserSummary) -> AppResult<()> {
        self.document.write().await.upsert_user(user);
        Ok(())
    }

    async fn load_plan_blob(&self, email: &str) -> AppResult<Option<String>> {
        Ok(self.document.read().await.plans.get(email).cloned())
    }

    async fn save_plan_blob(&self, email: &str, blob: String) -> AppResult<()> {
        self.document
            .write()
            .await
            .plans
            .insert(email.to_owned(), blob);
        Ok(())
    }

    async fn coin_balance(&self, email: &str) -> AppResult<CoinBalance> {
        Ok(self.document.read().await.coins_for(email))
    }

    async fn set_coin_balance(&self, email: &str, balance: CoinBalance) -> AppResult<()> {
        self.document
            .write()
            .await
            .coins
            .insert(email.to_owned(), balance);
        Ok(())
    }

    async fn credit_coins(&self, email: &str, reward: u64) -> AppResult<CoinBalance> {
        Ok(self.document.write().await.credit(email, reward))
    }
}
