//! HTTP handlers.
//!
//! | Method    | Path           | Notes |
//! |-----------|----------------|-------|
//! | `POST`    | `/inquiries`   | Body: submission JSON; reply mirrors the [`GatewayResponse`] |
//! | `OPTIONS` | `/inquiries`   | CORS preflight, 204 |
//! | `POST`    | `/invocations` | Body: raw event; reply is the [`GatewayResponse`] object as JSON |
//! | `GET`     | `/health`      | Liveness |

use axum::{
  Json,
  extract::{State, rejection::BytesRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use bytes::Bytes;
use inquiry_core::{payload::Payload, store::InquiryStore};
use serde_json::Value;

use crate::{
  AppState,
  config::CorsConfig,
  handler,
  response::{GatewayResponse, insert_headers},
};

/// `POST /inquiries`: the request body is the encoded submission.
///
/// Body rejections (e.g. over [`crate::MAX_BODY_BYTES`]) are answered here so
/// they still carry the CORS headers.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  body: Result<Bytes, BytesRejection>,
) -> GatewayResponse
where
  S: InquiryStore + Clone + 'static,
{
  let body = match body {
    Ok(body) => body,
    Err(rejection) => return rejected_body(rejection, &state.cors),
  };
  match String::from_utf8(body.to_vec()) {
    Ok(text) => {
      let payload = Payload::from_body_text(text);
      handler::handle_payload(state.store.as_ref(), &state.cors, payload).await
    }
    Err(_) => GatewayResponse::error(
      inquiry_core::Error::InvalidFormat("body is not valid UTF-8".into()),
      &state.cors,
    ),
  }
}

/// `OPTIONS /inquiries`: no store access.
pub async fn preflight<S>(State(state): State<AppState<S>>) -> Response
where
  S: InquiryStore + Clone + 'static,
{
  let mut res = StatusCode::NO_CONTENT.into_response();
  insert_headers(res.headers_mut(), state.cors.headers());
  res
}

/// `POST /invocations`: the request body is a whole event, delivered as-is.
pub async fn invoke<S>(
  State(state): State<AppState<S>>,
  body: Result<Bytes, BytesRejection>,
) -> Json<GatewayResponse>
where
  S: InquiryStore + Clone + 'static,
{
  let body = match body {
    Ok(body) => body,
    Err(rejection) => return Json(rejected_body(rejection, &state.cors)),
  };
  let response = match serde_json::from_slice::<Value>(&body) {
    Ok(event) => handler::handle(state.store.as_ref(), &state.cors, event).await,
    Err(e) => GatewayResponse::error(inquiry_core::Error::from(e), &state.cors),
  };
  Json(response)
}

fn rejected_body(rejection: BytesRejection, cors: &CorsConfig) -> GatewayResponse {
  tracing::warn!(error = %rejection, "request body rejected");
  GatewayResponse::error(rejection, cors)
}

/// `GET /health`
pub async fn health() -> &'static str { "ok" }
