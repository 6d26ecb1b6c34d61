//! Error types for the todo service core.
//!
//! # Design
//! One variant per failure class the REST surface distinguishes: validation
//! failures and the create-with-id precondition are client errors, `NotFound`
//! maps to 404, and `Store` wraps a backend failure that surfaces as a 5xx.
//! Nothing in this core retries; every failure is reported synchronously.

use std::fmt;

/// Failure of the underlying persistence backend.
///
/// Carries the backend's own message; the core neither interprets nor
/// retries it.
#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store failure: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Errors produced by the todo resource operations.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// A payload field failed its constraints.
    Validation { field: &'static str, message: String },

    /// Create was called with a payload that already carries an id.
    IdAlreadyPresent,

    /// The requested todo does not exist.
    NotFound,

    /// The persistence backend failed.
    Store(StoreError),
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation { field, message } => {
                write!(f, "invalid {field}: {message}")
            }
            ApiError::IdAlreadyPresent => {
                write!(f, "a new todo cannot already have an id")
            }
            ApiError::NotFound => write!(f, "todo not found"),
            ApiError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}
