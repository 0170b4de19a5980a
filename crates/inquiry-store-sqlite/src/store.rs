//! [`SqliteStore`]: the SQLite implementation of [`InquiryStore`].

use std::{path::Path, sync::Arc};

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use inquiry_core::{inquiry::Inquiry, store::InquiryStore};

use crate::{Result, schema::TableName};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An inquiry collection stored in one table of a SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
  table:           Arc<TableName>,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, creating `table` if needed.
  pub async fn open(path: impl AsRef<Path>, table: &str) -> Result<Self> {
    let table = TableName::parse(table)?;
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn, table).await
  }

  /// Open an in-memory store; useful for testing.
  pub async fn open_in_memory(table: &str) -> Result<Self> {
    let table = TableName::parse(table)?;
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, table).await
  }

  /// Name of the table this store writes to.
  pub fn table_name(&self) -> &str { self.table.as_str() }

  async fn init(conn: tokio_rusqlite::Connection, table: TableName) -> Result<Self> {
    let ddl = table.create_sql();
    conn
      .call(move |conn| {
        conn.execute_batch(&ddl)?;
        Ok(())
      })
      .await?;
    Ok(Self {
      conn,
      table: Arc::new(table),
    })
  }
}

// ─── InquiryStore impl ───────────────────────────────────────────────────────

impl InquiryStore for SqliteStore {
  type Error = crate::Error;

  async fn put_inquiry(&self, inquiry: Inquiry) -> Result<()> {
    let id_str = inquiry.id.hyphenated().to_string();
    let item = serde_json::to_string(&inquiry)?;
    let sql = self.table.put_sql();

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![id_str, item])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get_inquiry(&self, id: Uuid) -> Result<Option<Inquiry>> {
    let id_str = id.hyphenated().to_string();
    let sql = self.table.get_sql();

    let item: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    Ok(item.map(|s| serde_json::from_str(&s)).transpose()?)
  }

  async fn list_inquiries(&self) -> Result<Vec<Inquiry>> {
    let sql = self.table.list_sql();

    let items: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    items
      .iter()
      .map(|s| serde_json::from_str(s).map_err(crate::Error::from))
      .collect()
  }
}
