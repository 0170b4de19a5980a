//! API error type and its mapping to status codes and JSON bodies.

use axum::{extract::rejection::BytesRejection, http::StatusCode};
use serde_json::{Value, json};
use thiserror::Error;

/// Prefix of the storage-failure message; the cause is appended.
pub const STORAGE_ERROR_PREFIX: &str = "Error saving item to DynamoDB";

/// An error produced while handling a submission.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] inquiry_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The request body could not be read (e.g. it exceeds the size limit).
  #[error("request body rejected: {0}")]
  Body(#[from] BytesRejection),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Core(_) => StatusCode::BAD_REQUEST,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Body(rejection) => rejection.status(),
    }
  }

  /// The JSON document carried in the response body.
  pub fn body(&self) -> Value {
    match self {
      ApiError::Core(inquiry_core::Error::InvalidFormat(_)) => {
        json!({ "error": "Invalid JSON format" })
      }
      ApiError::Core(inquiry_core::Error::ValidationFailed { missing_fields }) => {
        json!({
          "error": "Validation failed",
          "missing_fields": missing_fields,
        })
      }
      ApiError::Store(e) => {
        json!({ "error": format!("{STORAGE_ERROR_PREFIX}: {e}") })
      }
      ApiError::Body(rejection) => json!({ "error": rejection.body_text() }),
    }
  }
}
