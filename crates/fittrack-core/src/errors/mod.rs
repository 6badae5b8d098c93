// ABOUTME: Unified error handling with standard error codes and serializable responses
// ABOUTME: Defines AppError, ErrorCode, AppResult and constructor helpers used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible fittrack operation returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`] so callers (the CLI, a mobile shell, tests) can branch
//! on the kind of failure without string matching.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    /// Generic invalid input
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    /// A required field was not supplied
    MissingRequiredField = 3001,
    #[serde(rename = "INVALID_FORMAT")]
    /// Input could not be parsed
    InvalidFormat = 3002,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    /// Numeric input outside the accepted range
    ValueOutOfRange = 3003,
    #[serde(rename = "INVALID_PROFILE")]
    /// Biometric profile values are not physically meaningful
    InvalidProfile = 3004,
    #[serde(rename = "INVALID_STATE")]
    /// Operation not allowed in the current workflow state
    InvalidState = 3005,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    /// Requested resource does not exist
    ResourceNotFound = 4000,
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    /// Resource with the same identity already exists
    ResourceAlreadyExists = 4001,
    #[serde(rename = "INSUFFICIENT_CREDITS")]
    /// Credit balance too low for a redemption
    InsufficientCredits = 4002,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    /// Generic configuration failure
    ConfigError = 6000,
    #[serde(rename = "CONFIG_INVALID")]
    /// Configuration values failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    /// Unexpected internal failure
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    /// Key-value store read or write failed
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    /// Document could not be serialized or deserialized
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidProfile => "The biometric profile is invalid",
            Self::InvalidState => "The operation is not allowed in the current state",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::InsufficientCredits => "Not enough credits for this redemption",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the error was caused by caller input rather than the environment
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        (*self as u16) < 6000
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field or resource the error refers to, if any
    pub resource_id: Option<String>,
    /// Additional structured details
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            details: Value::Null,
            source: None,
        }
    }

    /// Attach the field or resource identifier this error concerns
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Biometric profile rejected before any calculation
    #[must_use]
    pub fn invalid_profile(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidProfile, message).with_resource_id(field)
    }

    /// Required field missing
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
        .with_resource_id(field)
    }

    /// Value outside accepted bounds
    #[must_use]
    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_resource_id(field)
    }

    /// Operation not allowed in the current state
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidState, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
            .with_resource_id(resource)
    }

    /// Resource already exists
    #[must_use]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{resource} already exists"),
        )
        .with_resource_id(resource)
    }

    /// Not enough credits to redeem a reward
    #[must_use]
    pub fn insufficient_credits(balance: u32, cost: u32) -> Self {
        Self::new(
            ErrorCode::InsufficientCredits,
            format!("Reward costs {cost} credits but only {balance} are available"),
        )
        .with_details(json!({ "balance": balance, "cost": cost }))
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload handed to presentation layers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Field or resource the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Additional details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                field: error.resource_id,
                details: error.details,
            },
        }
    }
}
