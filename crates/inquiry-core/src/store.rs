//! The `InquiryStore` trait.
//!
//! Implemented by storage backends (e.g. `inquiry-store-sqlite`). The API
//! crate depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::inquiry::Inquiry;

/// Abstraction over a key-value collection of inquiries keyed by `id`.
///
/// All methods return `Send` futures so the trait can be used behind axum
/// handlers on a multi-threaded runtime.
pub trait InquiryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Write `inquiry` as a single atomic insert-or-replace keyed by its id.
  fn put_inquiry(
    &self,
    inquiry: Inquiry,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Inspection ──────────────────────────────────────────────────────────
  //
  // The service itself never reads inquiries back. These exist for operators
  // and tests to check what a submission wrote.

  /// Retrieve an inquiry by id. Returns `None` if not found.
  fn get_inquiry(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Inquiry>, Self::Error>> + Send + '_;

  /// List every stored inquiry in insertion order.
  fn list_inquiries(
    &self,
  ) -> impl Future<Output = Result<Vec<Inquiry>, Self::Error>> + Send + '_;
}
