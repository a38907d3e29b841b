// ABOUTME: Storage abstraction for workout logs, users, weekly plans and coin balances
// ABOUTME: Plugin architecture with in-memory and JSON-file backends behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Storage collaborators
//!
//! The analytics engine and the plan store never touch storage themselves.
//! They receive a `LogSnapshot` or a plan blob from a `FitnessStore` and hand
//! new log entries or blobs back to it.

use async_trait::async_trait;
use liftlog_core::models::{CoinBalance, LogSnapshot, UserSummary, WorkoutLogEntry};
use uuid::Uuid;

use crate::errors::AppResult;

/// Serializable document shared by the backends
pub mod document;
/// Backend selection from a storage URL
pub mod factory;
/// JSON file backend
pub mod json_file;
/// In-memory backend
pub mod memory;

pub use factory::{Database, DatabaseType};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Core storage abstraction trait
///
/// Writes from several devices are last-write-wins; implementations do not
/// attempt conflict resolution.
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    // ================================
    // Workout log
    // ================================

    /// Read every log entry and every known user
    async fn load_snapshot(&self) -> AppResult<LogSnapshot>;

    /// Append entries produced by one workout session, returning their ids
    async fn append_entries(&self, entries: Vec<WorkoutLogEntry>) -> AppResult<Vec<Uuid>>;

    /// Append a session's entries and credit its coin reward in one write
    ///
    /// Either both changes are stored or neither is.
    async fn append_session(
        &self,
        email: &str,
        entries: Vec<WorkoutLogEntry>,
        reward: u64,
    ) -> AppResult<(Vec<Uuid>, CoinBalance)>;

    /// Delete one entry by id; returns whether it existed
    async fn delete_entry(&self, id: Uuid) -> AppResult<bool>;

    // ================================
    // Users
    // ================================

    /// Insert or replace a user summary keyed by email
    async fn upsert_user(&self, user: UserSummary) -> AppResult<()>;

    // ================================
    // Weekly plans
    // ================================

    /// Persisted plan blob for a user, if one was saved
    async fn load_plan_blob(&self, email: &str) -> AppResult<Option<String>>;

    /// Replace a user's plan blob
    async fn save_plan_blob(&self, email: &str, blob: String) -> AppResult<()>;

    // ================================
    // Coins
    // ================================

    /// Coin balance for a user (zero if never credited)
    async fn coin_balance(&self, email: &str) -> AppResult<CoinBalance>;

    /// Replace a user's coin balance
    async fn set_coin_balance(&self, email: &str, balance: CoinBalance) -> AppResult<()>;

    /// Add a reward to a user's balance under one write, returning the new balance
    async fn credit_coins(&self, email: &str, reward: u64) -> AppResult<CoinBalance>;
}
