// ABOUTME: Write-side commands for the liftlog CLI
// ABOUTME: Records single-exercise or planned sessions and deletes log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{Local, Utc};
use liftlog::{
    database_plugins::FitnessStore,
    errors::{AppError, AppResult},
    models::{ExerciseEntry, WorkoutSession},
    planner::PlanSession,
    session_recorder::SessionRecorder,
};
use tracing::info;
use uuid::Uuid;

use super::CommandContext;
use crate::helpers::display::{display_recorded, print_json};

/// Log one strength exercise as a session
pub async fn strength(
    ctx: &CommandContext,
    name: String,
    sets: u32,
    reps: u32,
    weight: f64,
) -> AppResult<()> {
    record_single(
        ctx,
        ExerciseEntry::Strength {
            name,
            sets,
            reps,
            weight,
        },
    )
    .await
}

/// Log one cardio exercise as a session
pub async fn cardio(
    ctx: &CommandContext,
    name: String,
    minutes: u32,
    distance: Option<f64>,
) -> AppResult<()> {
    record_single(
        ctx,
        ExerciseEntry::Cardio {
            name,
            minutes,
            distance,
        },
    )
    .await
}

/// Log one stretch as a session
pub async fn stretch(ctx: &CommandContext, name: String, minutes: u32) -> AppResult<()> {
    record_single(ctx, ExerciseEntry::Stretch { name, minutes }).await
}

/// Log every exercise planned for today as one session
pub async fn today(ctx: &CommandContext) -> AppResult<()> {
    let user = ctx.user()?;
    let plan = PlanSession::load(&ctx.database, user).await?;
    let session = plan.session_from_today(&Local::now())?;
    record(ctx, &session).await
}

/// Delete a log entry
pub async fn delete(ctx: &CommandContext, id: Uuid) -> AppResult<()> {
    if !ctx.database.delete_entry(id).await? {
        return Err(AppError::not_found(format!("Log entry {id}")));
    }
    info!(entry.id = %id, "Deleted log entry");
    if ctx.json {
        return print_json(&serde_json::json!({ "deleted": id }));
    }
    println!("Deleted {id}");
    Ok(())
}

async fn record_single(ctx: &CommandContext, exercise: ExerciseEntry) -> AppResult<()> {
    let session = WorkoutSession::new(ctx.user()?).with_exercise(exercise);
    record(ctx, &session).await
}

async fn record(ctx: &CommandContext, session: &WorkoutSession) -> AppResult<()> {
    let recorder = SessionRecorder::from_config(&ctx.config);
    let recorded = recorder.record(&ctx.database, session, Utc::now()).await?;

    if ctx.json {
        return print_json(&recorded);
    }
    display_recorded(session, &recorded, recorder.coin_reward());
    Ok(())
}
