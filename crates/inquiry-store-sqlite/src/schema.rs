//! Table naming rules and DDL for inquiry collections.

use crate::{Error, Result};

/// Table used when no name is configured.
pub const DEFAULT_TABLE_NAME: &str = "InquiryTable";

/// A table name that has passed [`TableName::parse`], safe to splice into SQL
/// as a quoted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableName(String);

impl TableName {
  /// Accept names of 3 to 255 characters drawn from `[A-Za-z0-9_.-]`, the
  /// same rules managed key-value stores apply to table names.
  pub(crate) fn parse(name: &str) -> Result<Self> {
    let valid_len = (3..=255).contains(&name.len());
    let valid_chars = name
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid_len && valid_chars {
      Ok(Self(name.to_owned()))
    } else {
      Err(Error::InvalidTableName(name.to_owned()))
    }
  }

  pub(crate) fn as_str(&self) -> &str { &self.0 }

  /// DDL for the collection; idempotent thanks to `IF NOT EXISTS`.
  pub(crate) fn create_sql(&self) -> String {
    format!(
      "CREATE TABLE IF NOT EXISTS \"{}\" (
    id    TEXT PRIMARY KEY,   -- UUID, hyphenated lowercase
    item  TEXT NOT NULL       -- JSON document of the full record
);",
      self.0
    )
  }

  pub(crate) fn put_sql(&self) -> String {
    format!("INSERT OR REPLACE INTO \"{}\" (id, item) VALUES (?1, ?2)", self.0)
  }

  pub(crate) fn get_sql(&self) -> String {
    format!("SELECT item FROM \"{}\" WHERE id = ?1", self.0)
  }

  pub(crate) fn list_sql(&self) -> String {
    format!("SELECT item FROM \"{}\" ORDER BY rowid", self.0)
  }
}
