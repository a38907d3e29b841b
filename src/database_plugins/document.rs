// ABOUTME: Serializable storage document shared by the in-memory and JSON file backends
// ABOUTME: Holds log entries, users, plan blobs and coin balances with mutation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::BTreeMap;

use liftlog_core::models::{CoinBalance, LogSnapshot, UserSummary, WorkoutLogEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a backend persists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreDocument {
    /// Workout log in append order
    pub log_entries: Vec<WorkoutLogEntry>,
    /// Known users
    pub users: Vec<UserSummary>,
    /// Opaque plan blobs keyed by user email
    pub plans: BTreeMap<String, String>,
    /// Coin balances keyed by user email
    pub coins: BTreeMap<String, CoinBalance>,
}

impl StoreDocument {
    /// Copy of the log and users for the analytics engine
    #[must_use]
    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot::new(self.log_entries.clone(), self.users.clone())
    }

    /// Append entries, assigning fresh ids to any that carry the nil id
    pub fn append(&mut self, entries: Vec<WorkoutLogEntry>) -> Vec<Uuid> {
        let mut ids = Vec::with_capacity(entries.len());
        for mut entry in entries {
            if entry.id.is_nil() {
                entry.id = Uuid::new_v4();
            }
            ids.push(entry.id);
            self.log_entries.push(entry);
        }
        ids
    }

    /// Give every entry loaded without an id a fresh one; returns how many changed
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;
        for entry in self.log_entries.iter_mut().filter(|entry| entry.id.is_nil()) {
            entry.id = Uuid::new_v4();
            assigned += 1;
        }
        assigned
    }

    /// Remove an entry by id; returns whether one was removed
    ///
    /// The nil id never matches.
    pub fn delete(&mut self, id: Uuid) -> bool {
        if id.is_nil() {
            return false;
        }
        let before = self.log_entries.len();
        self.log_entries.retain(|entry| entry.id != id);
        self.log_entries.len() != before
    }

    /// Insert or replace a user by email
    pub fn upsert_user(&mut self, user: UserSummary) {
        match self.users.iter_mut().find(|known| known.email == user.email) {
            Some(known) => *known = user,
            None => self.users.push(user),
        }
    }

    /// Coin balance for a user
    #[must_use]
    pub fn coins_for(&self, email: &str) -> CoinBalance {
        self.coins.get(email).copied().unwrap_or_default()
    }

    /// Add a reward to a user's balance and return the new balance
    pub fn credit(&mut self, email: &str, reward: u64) -> CoinBalance {
        let balance = self.coins_for(email).credit(reward);
        self.coins.insert(email.to_owned(), balance);
        balance
    }

    /// Append a session's entries and credit its reward as one change
    pub fn append_session(
        &mut self,
        email: &str,
        entries: Vec<WorkoutLogEntry>,
        reward: u64,
    ) -> (Vec<Uuid>, CoinBalance) {
        let ids = self.append(entries);
        (ids, self.credit(email, reward))
    }
}
