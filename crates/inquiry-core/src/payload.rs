//! Normalization of incoming events into a validated [`NewInquiry`].
//!
//! An event reaches the service in one of two shapes: the submission object
//! itself (direct invocation), or an envelope whose `body` key carries the
//! submission, either already parsed or as JSON text (gateway delivery).
//! [`Payload`] collapses both into one representation before validation.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Result, inquiry::NewInquiry};

/// Required submission fields, in the order they are checked and reported.
pub const REQUIRED_FIELDS: [&str; 3] = ["mailAddress", "userName", "reviewText"];

/// A submission payload as delivered by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
  /// An already-parsed JSON object.
  Structured(Map<String, Value>),
  /// JSON text that still needs decoding.
  Encoded(String),
}

impl Payload {
  /// Pick the payload out of a raw event.
  ///
  /// A non-empty `body` string or object wins. An absent or empty `body`
  /// means the event itself is the submission.
  pub fn from_event(event: Value) -> Result<Self> {
    let Value::Object(mut event) = event else {
      return Err(Error::InvalidFormat("event is not a JSON object".into()));
    };

    match event.remove("body") {
      None => Ok(Self::Structured(event)),
      Some(ref body) if is_empty_value(body) => Ok(Self::Structured(event)),
      Some(Value::String(text)) => Ok(Self::Encoded(text)),
      Some(Value::Object(body)) => Ok(Self::Structured(body)),
      Some(other) => Err(Error::InvalidFormat(format!(
        "unsupported body type: {}",
        type_name(&other)
      ))),
    }
  }

  /// Wrap a raw HTTP request body. An empty body carries no submission, so it
  /// becomes an empty object and fails validation rather than decoding.
  pub fn from_body_text(text: String) -> Self {
    if text.is_empty() {
      Self::Structured(Map::new())
    } else {
      Self::Encoded(text)
    }
  }

  /// Decode (if needed) and validate the payload.
  ///
  /// Absent, `null` and empty-string fields are all reported as missing, and
  /// every missing field is collected before failing.
  pub fn into_submission(self) -> Result<NewInquiry> {
    let fields = match self {
      Self::Structured(map) => map,
      Self::Encoded(text) => match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => map,
        other => {
          return Err(Error::InvalidFormat(format!(
            "body is a JSON {}, expected an object",
            type_name(&other)
          )));
        }
      },
    };

    let raw: RawSubmission = serde_json::from_value(Value::Object(fields))?;
    raw.validate()
  }
}

/// Field values as sent. Non-string values fail deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
  mail_address: Option<String>,
  user_name:    Option<String>,
  review_text:  Option<String>,
}

impl RawSubmission {
  fn validate(self) -> Result<NewInquiry> {
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());

    match (
      present(self.mail_address),
      present(self.user_name),
      present(self.review_text),
    ) {
      (Some(mail_address), Some(user_name), Some(review_text)) => {
        Ok(NewInquiry {
          mail_address,
          user_name,
          review_text,
        })
      }
      (mail_address, user_name, review_text) => {
        let missing_fields = REQUIRED_FIELDS
          .into_iter()
          .zip([
            mail_address.is_none(),
            user_name.is_none(),
            review_text.is_none(),
          ])
          .filter_map(|(field, missing)| missing.then_some(field))
          .collect();
        Err(Error::ValidationFailed { missing_fields })
      }
    }
  }
}

/// `null`, `false`, zero and empty strings/arrays/objects.
fn is_empty_value(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(a) => a.is_empty(),
    Value::Object(o) => o.is_empty(),
  }
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
