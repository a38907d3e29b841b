// ABOUTME: Unit tests for the unified error type
// ABOUTME: Validates domain error mapping, exit codes and serialized error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;
use std::io;

use liftlog::errors::{AppError, ErrorCode, ErrorResponse};
use liftlog::models::WorkoutType;
use liftlog::planner::DayOfWeek;
use liftlog_core::errors::{PlanError, ValidationError};

#[test]
fn test_plan_errors_map_to_codes() {
    let cases = [
        (
            PlanError::IndexOutOfRange {
                day: DayOfWeek::Monday,
                index: 4,
                len: 2,
            },
            ErrorCode::ValueOutOfRange,
        ),
        (
            PlanError::DayNotWorkout {
                day: DayOfWeek::Sunday,
            },
            ErrorCode::InvalidState,
        ),
        (
            PlanError::UnknownDay("Funday".to_owned()),
            ErrorCode::InvalidInput,
        ),
        (PlanError::corrupt("missing Friday"), ErrorCode::CorruptPlan),
    ];

    for (plan_error, code) in cases {
        let message = plan_error.to_string();
        let error = AppError::from(plan_error);
        assert_eq!(error.code, code);
        assert_eq!(error.message, message);
        assert!(error.source().is_some());
    }
}

#[test]
fn test_validation_errors_map_to_codes() {
    let missing = AppError::from(ValidationError::MissingField {
        exercise: "Squat".to_owned(),
        workout_type: WorkoutType::Strength,
        field: "reps",
    });
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);
    assert!(missing.message.contains("reps"));

    let empty = AppError::from(ValidationError::EmptySession {
        user_email: "alice@example.com".to_owned(),
    });
    assert_eq!(empty.code, ErrorCode::InvalidInput);
}

#[test]
fn test_corrupt_plan_is_distinguishable() {
    assert!(AppError::from(PlanError::corrupt("bad")).is_corrupt_plan());
    assert!(!AppError::invalid_input("bad").is_corrupt_plan());
    assert!(PlanError::corrupt("bad").is_corrupt_plan());
}

#[test]
fn test_exit_codes() {
    assert_eq!(ErrorCode::InvalidInput.exit_code(), 2);
    assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 2);
    assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 3);
    assert_eq!(ErrorCode::CorruptPlan.exit_code(), 4);
    assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
    assert_eq!(ErrorCode::StorageError.exit_code(), 1);
}

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::not_found("Log entry 42");

    assert_eq!(
        error.to_string(),
        "The requested resource was not found: Log entry 42 not found"
    );
}

#[test]
fn test_io_and_json_errors_convert() {
    let io_error = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(io_error.code, ErrorCode::StorageError);

    let json_error = AppError::from(serde_json::from_str::<u32>("nope").unwrap_err());
    assert_eq!(json_error.code, ErrorCode::SerializationError);
}

#[test]
fn test_error_response_serialization() {
    let error = AppError::config_invalid("LIFTLOG_COIN_REWARD", "ten", "not a valid number")
        .with_user("alice@example.com");

    let response = ErrorResponse::from(error);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["error"]["code"], "CONFIG_INVALID");
    assert_eq!(
        json["error"]["message"],
        "LIFTLOG_COIN_REWARD=ten: not a valid number"
    );
}
