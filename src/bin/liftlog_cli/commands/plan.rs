// ABOUTME: Weekly plan commands for the liftlog CLI
// ABOUTME: Each edit loads the saved plan, applies one change and saves it explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{Datelike, Local};
use liftlog::{
    errors::AppResult,
    models::{PlannedExercise, WorkoutType},
    planner::{DayOfWeek, PlanSession},
};
use tracing::warn;

use super::CommandContext;
use crate::helpers::display::{display_plan, display_slot, print_json};

/// Show the whole week
pub async fn show(ctx: &CommandContext) -> AppResult<()> {
    let session = load(ctx).await?;
    if ctx.json {
        return print_json(session.plan());
    }
    display_plan(session.plan());
    Ok(())
}

/// Show today's slot
pub async fn today(ctx: &CommandContext) -> AppResult<()> {
    let session = load(ctx).await?;
    let now = Local::now();
    let slot = session.today(&now);
    if ctx.json {
        return print_json(slot);
    }
    display_slot(DayOfWeek::from(now.weekday()), slot);
    Ok(())
}

/// Switch a day between rest and workout
pub async fn toggle(ctx: &CommandContext, day: DayOfWeek) -> AppResult<()> {
    edit(ctx, day, |session| {
        session.toggle_day(day);
        Ok(())
    })
    .await
}

/// Set a day's workout type
pub async fn set_type(
    ctx: &CommandContext,
    day: DayOfWeek,
    workout_type: WorkoutType,
) -> AppResult<()> {
    edit(ctx, day, |session| {
        session.set_day_type(day, workout_type);
        let stale = session.plan().slot(day).mismatched_exercises().count();
        if stale > 0 {
            warn!(day = %day, stale, "Day keeps exercises planned under another type");
        }
        Ok(())
    })
    .await
}

/// Add a planned exercise; its type defaults to the day's type
pub async fn add(
    ctx: &CommandContext,
    day: DayOfWeek,
    build: impl FnOnce(WorkoutType) -> PlannedExercise + Send,
) -> AppResult<()> {
    edit(ctx, day, |session| {
        let exercise = build(session.plan().slot(day).workout_type);
        session.add_exercise(day, exercise).map(drop)
    })
    .await
}

/// Replace the planned exercise at `index`
pub async fn update(
    ctx: &CommandContext,
    day: DayOfWeek,
    index: usize,
    build: impl FnOnce(WorkoutType) -> PlannedExercise + Send,
) -> AppResult<()> {
    edit(ctx, day, |session| {
        let exercise = build(session.plan().slot(day).workout_type);
        session.update_exercise(day, index, exercise).map(drop)
    })
    .await
}

/// Remove the planned exercise at `index`
pub async fn remove(ctx: &CommandContext, day: DayOfWeek, index: usize) -> AppResult<()> {
    edit(ctx, day, |session| session.remove_exercise(day, index).map(drop)).await
}

/// Overwrite the saved plan with the default week
pub async fn save_default(ctx: &CommandContext) -> AppResult<()> {
    let mut session = PlanSession::reset(ctx.user()?);
    session.save(&ctx.database).await?;
    if ctx.json {
        return print_json(session.plan());
    }
    display_plan(session.plan());
    Ok(())
}

async fn load(ctx: &CommandContext) -> AppResult<PlanSession> {
    PlanSession::load(&ctx.database, ctx.user()?)
        .await
        .inspect_err(|e| {
            if e.is_corrupt_plan() {
                eprintln!(
                    "The saved plan cannot be read. Run `liftlog plan save-default` to start over."
                );
            }
        })
}

async fn edit(
    ctx: &CommandContext,
    day: DayOfWeek,
    change: impl FnOnce(&mut PlanSession) -> AppResult<()> + Send,
) -> AppResult<()> {
    let mut session = load(ctx).await?;
    change(&mut session)?;
    session.save(&ctx.database).await?;
    if ctx.json {
        return print_json(session.plan().slot(day));
    }
    display_slot(day, session.plan().slot(day));
    Ok(())
}
