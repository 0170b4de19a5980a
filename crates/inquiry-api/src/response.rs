//! The response object returned for every invocation.
//!
//! Mirrors the proxy-integration shape used by HTTP gateways: a status code,
//! a flat header map and a JSON-encoded body string.

use std::collections::BTreeMap;

use axum::{
  http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{config::CorsConfig, error::ApiError};

/// Confirmation message for a saved inquiry.
pub const SAVED_MESSAGE: &str = "Inquiry saved successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
  pub status_code: u16,
  pub headers:     BTreeMap<String, String>,
  /// JSON document, already encoded.
  pub body:        String,
}

impl GatewayResponse {
  /// Map a handler outcome to its response. Pure; no side effects.
  pub fn from_outcome<T>(outcome: Result<T, ApiError>, cors: &CorsConfig) -> Self {
    let (status, body) = match outcome {
      Ok(_) => (StatusCode::OK, json!({ "message": SAVED_MESSAGE })),
      Err(e) => (e.status(), e.body()),
    };
    Self {
      status_code: status.as_u16(),
      headers:     cors.headers(),
      body:        body.to_string(),
    }
  }

  pub fn error(err: impl Into<ApiError>, cors: &CorsConfig) -> Self {
    Self::from_outcome::<()>(Err(err.into()), cors)
  }
}

impl IntoResponse for GatewayResponse {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.status_code)
      .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut res = (status, self.body).into_response();
    insert_headers(res.headers_mut(), self.headers);
    res
  }
}

/// Copy `headers` into `map`, replacing existing values. Entries that are not
/// valid HTTP header names or values are skipped.
pub(crate) fn insert_headers(map: &mut HeaderMap, headers: BTreeMap<String, String>) {
  for (name, value) in headers {
    match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
      (Ok(name), Ok(value)) => {
        map.insert(name, value);
      }
      _ => tracing::warn!("skipping invalid response header"),
    }
  }
}
