//! The inquiry submission handler.
//!
//! Normalize the event, validate it, build the record and write it with a
//! single store call. Every known failure becomes a [`GatewayResponse`];
//! nothing is retried.

use inquiry_core::{
  inquiry::Inquiry,
  payload::Payload,
  store::InquiryStore,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{config::CorsConfig, error::ApiError, response::GatewayResponse};

/// Handle a raw event: either the submission itself or an envelope whose
/// `body` carries it.
pub async fn handle<S>(store: &S, cors: &CorsConfig, event: Value) -> GatewayResponse
where
  S: InquiryStore,
{
  let outcome = match Payload::from_event(event) {
    Ok(payload) => submit(store, payload).await,
    Err(e) => Err(rejected(e.into())),
  };
  GatewayResponse::from_outcome(outcome, cors)
}

/// Handle a payload that has already been separated from its transport.
pub async fn handle_payload<S>(
  store: &S,
  cors: &CorsConfig,
  payload: Payload,
) -> GatewayResponse
where
  S: InquiryStore,
{
  GatewayResponse::from_outcome(submit(store, payload).await, cors)
}

/// Validate `payload` and persist it. Returns the new inquiry's id.
///
/// The store is not touched unless validation passes.
pub async fn submit<S>(store: &S, payload: Payload) -> Result<Uuid, ApiError>
where
  S: InquiryStore,
{
  let submission = payload.into_submission().map_err(|e| rejected(e.into()))?;

  let inquiry = Inquiry::new(submission);
  let id = inquiry.id;

  store.put_inquiry(inquiry).await.map_err(|e| {
    tracing::error!(%id, error = %e, "failed to save inquiry");
    ApiError::Store(Box::new(e))
  })?;

  tracing::info!(%id, "inquiry saved");
  Ok(id)
}

fn rejected(err: ApiError) -> ApiError {
  match &err {
    ApiError::Core(inquiry_core::Error::ValidationFailed { missing_fields }) => {
      tracing::warn!(?missing_fields, "inquiry rejected: validation failed");
    }
    other => tracing::warn!(error = %other, "inquiry rejected: invalid format"),
  }
  err
}
