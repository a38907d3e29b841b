// ABOUTME: Unified error handling for the liftlog application crate
// ABOUTME: Standard error codes, contextual AppError, and conversions from domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Unified Error Handling System
//!
//! Domain crates raise narrow error enums (`PlanError`, `ValidationError`).
//! At the application boundary they are converted into `AppError`, which
//! carries a stable `ErrorCode`, a message, optional context and the source
//! error for chaining.

use std::error::Error as StdError;
use std::io;

use liftlog_core::errors::{PlanError, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A field required for the exercise type is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// An index or value is outside its valid range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource state (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Operation is not allowed in the resource's current state
    #[serde(rename = "INVALID_STATE")]
    InvalidState = 4001,
    /// Persisted weekly plan could not be decoded
    #[serde(rename = "CORRUPT_PLAN")]
    CorruptPlan = 4002,

    // Configuration (6000-6999)
    /// Configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Storage backend failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status the CLI reports for this error
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 2,
            Self::ResourceNotFound | Self::InvalidState => 3,
            Self::CorruptPlan => 4,
            Self::ConfigError | Self::ConfigMissing | Self::ConfigInvalid => 78,
            Self::InternalError | Self::StorageError | Self::SerializationError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InvalidState => "The operation is not allowed in the current state",
            Self::CorruptPlan => "The saved weekly plan is corrupt",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// User the failing operation acted for
    pub user_email: Option<String>,
    /// Resource ID if applicable
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            user_email: None,
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add the acting user to the error context
    #[must_use]
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.context.user_email = Some(email.into());
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Invalid configuration value
    pub fn config_invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigInvalid,
            format!("{key}={value}: {}", reason.into()),
        )
        .with_resource_id(key)
    }

    /// Whether the error reports a corrupt persisted plan
    #[must_use]
    pub fn is_corrupt_plan(&self) -> bool {
        self.code == ErrorCode::CorruptPlan
    }
}

/// Serialized error format used by the CLI's JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an `ErrorResponse`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Extra structured details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.context.details,
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let code = match &error {
            PlanError::IndexOutOfRange { .. } => ErrorCode::ValueOutOfRange,
            PlanError::DayNotWorkout { .. } => ErrorCode::InvalidState,
            PlanError::UnknownDay(_) => ErrorCode::InvalidInput,
            PlanError::CorruptPlan(_) => ErrorCode::CorruptPlan,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match &error {
            ValidationError::MissingField { .. } => ErrorCode::MissingRequiredField,
            ValidationError::InvalidValue { .. } => ErrorCode::ValueOutOfRange,
            ValidationError::EmptyName
            | ValidationError::EmptySession { .. }
            | ValidationError::MissingUser => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => Self::internal(error.to_string()).with_details(serde_json::json!({
                "source": source.to_string()
            })),
            None => Self::internal(error.to_string()),
        }
    }
}
