//! HTTP front end for the inquiry service.
//!
//! [`handler::handle`] is the transport-agnostic entry point; [`router`]
//! exposes it over HTTP, backed by any [`InquiryStore`].

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod routes;

pub use error::ApiError;
pub use response::GatewayResponse;

use std::sync::Arc;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use inquiry_core::store::InquiryStore;
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. The store handle is
/// opened once per process and only ever read through this `Arc`.
#[derive(Clone)]
pub struct AppState<S: InquiryStore> {
  pub store: Arc<S>,
  pub cors:  Arc<CorsConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the service [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: InquiryStore + Clone + 'static,
{
  Router::new()
    .route("/inquiries", post(routes::submit::<S>).options(routes::preflight::<S>))
    .route("/invocations", post(routes::invoke::<S>))
    .route("/health", get(routes::health))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
