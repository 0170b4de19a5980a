//! The inquiry record and its validated input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submission whose required fields have all been checked non-empty.
///
/// Only [`crate::payload::Payload::into_submission`] produces one outside of
/// tests, so holding a `NewInquiry` means validation already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
  pub mail_address: String,
  pub user_name:    String,
  pub review_text:  String,
}

/// A persisted inquiry. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
  pub id:           Uuid,
  pub mail_address: String,
  pub user_name:    String,
  pub review_text:  String,
  pub created_at:   DateTime<Utc>,
  /// Always equal to `created_at`; there is no update path.
  pub updated_at:   DateTime<Utc>,
}

impl Inquiry {
  /// Assign a fresh id and creation timestamp to a validated submission.
  pub fn new(input: NewInquiry) -> Self {
    let now = Utc::now();
    Self {
      id:           Uuid::new_v4(),
      mail_address: input.mail_address,
      user_name:    input.user_name,
      review_text:  input.review_text,
      created_at:   now,
      updated_at:   now,
    }
  }
}
