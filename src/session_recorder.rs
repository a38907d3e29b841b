// ABOUTME: Append path for finished workout sessions with the coin reward side channel
// ABOUTME: Validates a session, appends its log entries, then credits the user's coin balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Session recording
//!
//! A session becomes one log entry per exercise. The entries and the coin
//! reward are written as one store change, so a failed write neither keeps
//! the entries nor pays out.

use chrono::{DateTime, Utc};
use liftlog_core::models::{CoinBalance, WorkoutSession};
use liftlog_core::taxonomy::ExerciseTaxonomy;
use serde::Serialize;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::config::LiftlogConfig;
use crate::constants::rewards;
use crate::database_plugins::FitnessStore;
use crate::errors::AppResult;
use crate::logging::AppLogger;

/// Outcome of a recorded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSession {
    /// Ids of the appended log entries, in exercise order
    pub entry_ids: Vec<Uuid>,
    /// Coin balance after the reward
    pub balance: CoinBalance,
}

/// Records sessions against a store
#[derive(Debug, Clone)]
pub struct SessionRecorder {
    taxonomy: ExerciseTaxonomy,
    coin_reward: u64,
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new(ExerciseTaxonomy::standard(), rewards::COINS_PER_SESSION)
    }
}

impl SessionRecorder {
    /// Create a recorder with an explicit taxonomy and reward
    #[must_use]
    pub const fn new(taxonomy: ExerciseTaxonomy, coin_reward: u64) -> Self {
        Self {
            taxonomy,
            coin_reward,
        }
    }

    /// Recorder using the standard taxonomy and the configured reward
    #[must_use]
    pub fn from_config(config: &LiftlogConfig) -> Self {
        Self::new(ExerciseTaxonomy::standard(), config.coin_reward)
    }

    /// Taxonomy used to resolve muscle groups
    #[must_use]
    pub const fn taxonomy(&self) -> &ExerciseTaxonomy {
        &self.taxonomy
    }

    /// Coins credited per session
    #[must_use]
    pub const fn coin_reward(&self) -> u64 {
        self.coin_reward
    }

    /// Append a finished session and credit the reward
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank email, an empty session or an
    /// invalid exercise. Store errors are propagated; when one is returned
    /// neither the entries nor the coins were stored.
    #[instrument(skip(self, store, session), fields(user.email = %session.user_email))]
    pub async fn record<S: FitnessStore + ?Sized>(
        &self,
        store: &S,
        session: &WorkoutSession,
        now: DateTime<Utc>,
    ) -> AppResult<RecordedSession> {
        let entries = session.to_log_entries(&self.taxonomy, now)?;
        let email = session.user_email.as_str();

        let (entry_ids, balance) = store
            .append_session(email, entries, self.coin_reward)
            .await
            .inspect_err(|e| {
                warn!(error = %e, "Session append failed, no coins credited");
            })?;

        AppLogger::log_session_recorded(email, entry_ids.len(), balance.coins());
        Ok(RecordedSession { entry_ids, balance })
    }
}
