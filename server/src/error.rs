//! Maps core errors onto HTTP responses.
//!
//! # Design
//! `ApiError` lives in the core crate and `IntoResponse` in axum, so the
//! mapping goes through a local newtype. Client errors carry a JSON body
//! with a message and, for validation failures, the offending field; store
//! failures are logged and answered with a bare 500 message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use todo_core::{ApiError, StoreError};

/// Newtype carrying an [`ApiError`] out of a handler.
#[derive(Debug)]
pub struct RestError(pub ApiError);

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ApiError::Validation { .. } | ApiError::IdAlreadyPresent => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(err) => {
                error!("{err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let field = match &self.0 {
            ApiError::Validation { field, .. } => Some(*field),
            _ => None,
        };
        let body = ErrorBody {
            message: self.0.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ApiError> for RestError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        Self(ApiError::Store(err))
    }
}
