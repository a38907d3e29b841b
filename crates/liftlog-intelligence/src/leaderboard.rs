// ABOUTME: Cross-user leaderboard ranked by number of logged entries
// ABOUTME: Resolves display labels from user summaries with an email local-part fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::HashMap;

use liftlog_core::models::{UserSummary, WorkoutLogEntry};
use serde::{Deserialize, Serialize};

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Email the entries were logged under
    pub email: String,
    /// Name shown for the user
    pub display_label: String,
    /// Number of log entries (not sessions) for the user
    pub session_count: u32,
    /// Avatar URL, when the user has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

/// Label shown for a user: a non-blank display name, otherwise the part of
/// the email before `@`
#[must_use]
pub fn display_label(email: &str, user: Option<&UserSummary>) -> String {
    user.and_then(|summary| summary.display_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(
            || email.split('@').next().unwrap_or(email).to_owned(),
            str::to_owned,
        )
}

/// Rank users by how many log entries they have, across all users
///
/// Each entry counts once, so a session with three exercises adds three.
/// Ties keep the order in which users first appear in the log.
pub fn leaderboard<'a>(
    entries: impl IntoIterator<Item = &'a WorkoutLogEntry>,
    users: &[UserSummary],
) -> Vec<LeaderboardEntry> {
    let mut order: Vec<(&str, u32)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        let email = entry.user_email.as_str();
        let position = *positions.entry(email).or_insert_with(|| {
            order.push((email, 0));
            order.len() - 1
        });
        order[position].1 = order[position].1.saturating_add(1);
    }

    // stable sort keeps first-appearance order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let summaries: HashMap<&str, &UserSummary> =
        users.iter().map(|user| (user.email.as_str(), user)).collect();
    order
        .into_iter()
        .map(|(email, count)| {
            let summary = summaries.get(email).copied();
            LeaderboardEntry {
                email: email.to_owned(),
                display_label: display_label(email, summary),
                session_count: count,
                profile_picture_url: summary.and_then(|user| user.profile_picture_url.clone()),
            }
        })
        .collect()
}
