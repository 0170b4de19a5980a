//! Error types for `inquiry-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The payload could not be decoded into a submission.
  #[error("invalid format: {0}")]
  InvalidFormat(String),

  /// One or more required fields were absent or empty.
  #[error("validation failed, missing fields: {}", missing_fields.join(", "))]
  ValidationFailed { missing_fields: Vec<&'static str> },
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self { Self::InvalidFormat(e.to_string()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
