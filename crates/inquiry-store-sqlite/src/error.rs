//! Error type for `inquiry-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// Table names must be 3-255 characters of `[A-Za-z0-9_.-]`.
  #[error("invalid table name: {0:?}")]
  InvalidTableName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
