// ABOUTME: Coin balance credited for completed workout sessions
// ABOUTME: Monotonic counter persisted independently of logs and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-negative coin balance for one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinBalance(u64);

impl CoinBalance {
    /// Wrap a raw coin count
    #[must_use]
    pub const fn new(coins: u64) -> Self {
        Self(coins)
    }

    /// Current coin count
    #[must_use]
    pub const fn coins(self) -> u64 {
        self.0
    }

    /// Balance after crediting a reward; saturates instead of wrapping
    #[must_use]
    pub const fn credit(self, reward: u64) -> Self {
        Self(self.0.saturating_add(reward))
    }
}

impl fmt::Display for CoinBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} coins", self.0)
    }
}
