// ABOUTME: Read-side commands for the liftlog CLI
// ABOUTME: Statistics, leaderboard, coin balance and leaderboard profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::Utc;
use liftlog::{
    database_plugins::FitnessStore,
    errors::AppResult,
    intelligence::{leaderboard as rank_users, AggregatorConfig, AnalyticsAggregator},
    models::UserSummary,
};
use tracing::info;

use super::CommandContext;
use crate::helpers::display::{
    display_coins, display_leaderboard, display_stats, print_json,
};

/// Show derived statistics for the acting user
pub async fn stats(ctx: &CommandContext, window_days: Option<u32>) -> AppResult<()> {
    let user = ctx.user()?;
    let config = window_days.map_or(ctx.config.analytics, |days| AggregatorConfig {
        trailing_window_days: i64::from(days),
    });
    let snapshot = ctx.database.load_snapshot().await?;
    let stats = AnalyticsAggregator::with_config(config).aggregate(&snapshot, Some(user), Utc::now());

    if ctx.json {
        return print_json(&stats);
    }
    display_stats(user, &stats, config.trailing_window_days);
    Ok(())
}

/// Show entry counts for every user
pub async fn leaderboard(ctx: &CommandContext) -> AppResult<()> {
    let snapshot = ctx.database.load_snapshot().await?;
    let ranking = rank_users(&snapshot.log_entries, &snapshot.users);

    if ctx.json {
        return print_json(&ranking);
    }
    display_leaderboard(&ranking, ctx.user.as_deref());
    Ok(())
}

/// Show the acting user's coin balance
pub async fn coins(ctx: &CommandContext) -> AppResult<()> {
    let user = ctx.user()?;
    let balance = ctx.database.coin_balance(user).await?;

    if ctx.json {
        return print_json(&balance);
    }
    display_coins(user, balance);
    Ok(())
}

/// Insert or update the acting user's leaderboard profile
pub async fn profile(
    ctx: &CommandContext,
    display_name: Option<String>,
    picture_url: Option<String>,
) -> AppResult<()> {
    let user = ctx.user()?;
    let snapshot = ctx.database.load_snapshot().await?;
    let mut summary = snapshot
        .user(user)
        .cloned()
        .unwrap_or_else(|| UserSummary::new(user));
    if display_name.is_some() {
        summary.display_name = display_name;
    }
    if picture_url.is_some() {
        summary.profile_picture_url = picture_url;
    }

    ctx.database.upsert_user(summary.clone()).await?;
    info!(user.email = %user, "Updated user profile");

    if ctx.json {
        return print_json(&summary);
    }
    println!("Profile saved for {}", summary.email);
    Ok(())
}
