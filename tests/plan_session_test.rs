// ABOUTME: Integration tests for per-user plan sessions
// ABOUTME: Tests loading, corrupt-plan handling, dirty tracking, explicit saves and today's session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{Datelike, Weekday};
use common::{create_test_store, test_now, ALICE, BOB};
use liftlog::database_plugins::FitnessStore;
use liftlog::errors::ErrorCode;
use liftlog::models::{ExerciseEntry, ExerciseTaxonomy, PlannedExercise, WorkoutType};
use liftlog::planner::{DayOfWeek, PlanSession, WeeklyPlan};

#[tokio::test]
async fn test_missing_plan_loads_default_week() -> Result<()> {
    let store = create_test_store();

    let session = PlanSession::load(&store, ALICE).await?;

    assert_eq!(session.plan(), &WeeklyPlan::default());
    assert!(!session.is_dirty());
    assert_eq!(session.user_email(), ALICE);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_plan_is_reported_not_defaulted() -> Result<()> {
    let store = create_test_store();
    store
        .save_plan_blob(ALICE, r#"{"Monday": "gym"}"#.to_owned())
        .await?;

    let err = PlanSession::load(&store, ALICE).await.unwrap_err();

    assert!(err.is_corrupt_plan());
    assert_eq!(err.code, ErrorCode::CorruptPlan);
    assert_eq!(err.context.user_email.as_deref(), Some(ALICE));
    // the stored blob is left alone until the caller decides
    assert_eq!(
        store.load_plan_blob(ALICE).await?.as_deref(),
        Some(r#"{"Monday": "gym"}"#)
    );
    Ok(())
}

#[tokio::test]
async fn test_reset_then_save_replaces_corrupt_plan() -> Result<()> {
    let store = create_test_store();
    store.save_plan_blob(ALICE, "garbage".to_owned()).await?;

    let mut session = PlanSession::reset(ALICE);
    assert!(session.is_dirty());
    session.save(&store).await?;

    let reloaded = PlanSession::load(&store, ALICE).await?;
    assert_eq!(reloaded.plan(), &WeeklyPlan::default());
    Ok(())
}

#[tokio::test]
async fn test_edits_are_not_persisted_until_saved() -> Result<()> {
    let store = create_test_store();
    let mut session = PlanSession::load(&store, ALICE).await?;

    session.toggle_day(DayOfWeek::Monday);
    session.add_exercise(
        DayOfWeek::Monday,
        PlannedExercise::strength("Squat", 3, 10, 50.0),
    )?;
    assert!(session.is_dirty());
    assert_eq!(store.load_plan_blob(ALICE).await?, None);

    session.save(&store).await?;
    assert!(!session.is_dirty());

    let reloaded = PlanSession::load(&store, ALICE).await?;
    assert_eq!(reloaded.plan(), session.plan());
    assert_eq!(PlanSession::load(&store, BOB).await?.plan(), &WeeklyPlan::default());
    Ok(())
}

#[tokio::test]
async fn test_incomplete_exercise_is_rejected_and_plan_unchanged() -> Result<()> {
    let store = create_test_store();
    let mut session = PlanSession::load(&store, ALICE).await?;
    session.toggle_day(DayOfWeek::Monday);
    session.save(&store).await?;

    let err = session
        .add_exercise(
            DayOfWeek::Monday,
            PlannedExercise::new("Squat", WorkoutType::Strength),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(session.plan().slot(DayOfWeek::Monday).exercises.is_empty());
    assert!(!session.is_dirty());
    Ok(())
}

#[tokio::test]
async fn test_session_error_codes() -> Result<()> {
    let store = create_test_store();
    let mut session = PlanSession::load(&store, ALICE).await?;

    let rest_day = session
        .add_exercise(DayOfWeek::Sunday, PlannedExercise::stretch("Cat-Cow", 5))
        .unwrap_err();
    assert_eq!(rest_day.code, ErrorCode::InvalidState);

    let out_of_range = session.remove_exercise(DayOfWeek::Sunday, 0).unwrap_err();
    assert_eq!(out_of_range.code, ErrorCode::ValueOutOfRange);
    Ok(())
}

#[tokio::test]
async fn test_rest_day_is_reported_before_missing_fields() -> Result<()> {
    let store = create_test_store();
    let mut session = PlanSession::load(&store, ALICE).await?;
    assert!(session.plan().slot(DayOfWeek::Sunday).is_rest_day());

    let err = session
        .add_exercise(
            DayOfWeek::Sunday,
            PlannedExercise::new("Squat", WorkoutType::Strength),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidState);
    assert!(!session.is_dirty());
    Ok(())
}

#[tokio::test]
async fn test_blank_user_is_rejected() {
    let store = create_test_store();

    let err = PlanSession::load(&store, " ").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_today_and_session_from_today() {
    let now = test_now();
    assert_eq!(now.weekday(), Weekday::Wed);

    let mut session = PlanSession::new(ALICE, WeeklyPlan::default());
    let err = session.session_from_today(&now).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidState);

    session.toggle_day(DayOfWeek::Wednesday);
    session.set_day_type(DayOfWeek::Wednesday, WorkoutType::Cardio);
    let empty = session.session_from_today(&now).unwrap_err();
    assert_eq!(empty.code, ErrorCode::InvalidInput);

    session
        .add_exercise(
            DayOfWeek::Wednesday,
            PlannedExercise::cardio("Running", 30, Some(5.0)),
        )
        .unwrap();

    assert_eq!(session.today(&now).exercises.len(), 1);
    let workout = session.session_from_today(&now).unwrap();
    assert_eq!(workout.user_email, ALICE);
    assert_eq!(
        workout.exercises,
        vec![ExerciseEntry::Cardio {
            name: "Running".to_owned(),
            minutes: 30,
            distance: Some(5.0),
        }]
    );
}

#[test]
fn test_stale_exercise_after_type_change_keeps_its_own_type() {
    let now = test_now();
    let mut session = PlanSession::new(ALICE, WeeklyPlan::default());
    session.toggle_day(DayOfWeek::Wednesday);
    session
        .add_exercise(
            DayOfWeek::Wednesday,
            PlannedExercise::strength("Bench Press", 3, 8, 60.0),
        )
        .unwrap();
    session.set_day_type(DayOfWeek::Wednesday, WorkoutType::Stretch);

    // exercises keep their own type, so the session still builds from them
    let workout = session.session_from_today(&now).unwrap();
    assert_eq!(workout.exercises[0].workout_type(), WorkoutType::Strength);
    assert_eq!(
        session
            .plan()
            .slot(DayOfWeek::Wednesday)
            .mismatched_exercises()
            .count(),
        1
    );
}

#[test]
fn test_selectable_exercises_follow_day_type() {
    let taxonomy = ExerciseTaxonomy::standard();
    let mut session = PlanSession::new(ALICE, WeeklyPlan::default());
    session.toggle_day(DayOfWeek::Friday);
    session.set_day_type(DayOfWeek::Friday, WorkoutType::Stretch);

    let names: Vec<&str> = session
        .selectable_exercises(&taxonomy, DayOfWeek::Friday)
        .map(|entry| entry.name.as_str())
        .collect();

    assert!(names.contains(&"Cat-Cow"));
    assert!(!names.contains(&"Squat"));
}
