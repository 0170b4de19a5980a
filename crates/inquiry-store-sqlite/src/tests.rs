//! Integration tests for `SqliteStore` against an in-memory database.

use inquiry_core::{
  inquiry::{Inquiry, NewInquiry},
  store::InquiryStore,
};
use uuid::Uuid;

use crate::{DEFAULT_TABLE_NAME, Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory(DEFAULT_TABLE_NAME)
    .await
    .expect("in-memory store")
}

fn inquiry(user_name: &str) -> Inquiry {
  Inquiry::new(NewInquiry {
    mail_address: "a@b.com".into(),
    user_name:    user_name.into(),
    review_text:  "Great!".into(),
  })
}

// ─── Put / get ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_and_get_inquiry() {
  let s = store().await;
  let record = inquiry("Alice");

  s.put_inquiry(record.clone()).await.unwrap();

  let fetched = s.get_inquiry(record.id).await.unwrap();
  assert_eq!(fetched, Some(record));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  let result = s.get_inquiry(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn same_content_twice_creates_two_records() {
  let s = store().await;
  s.put_inquiry(inquiry("Alice")).await.unwrap();
  s.put_inquiry(inquiry("Alice")).await.unwrap();

  let all = s.list_inquiries().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_ne!(all[0].id, all[1].id);
}

#[tokio::test]
async fn put_with_existing_id_replaces() {
  let s = store().await;
  let first = inquiry("Alice");
  let mut second = inquiry("Bob");
  second.id = first.id;

  s.put_inquiry(first.clone()).await.unwrap();
  s.put_inquiry(second.clone()).await.unwrap();

  let all = s.list_inquiries().await.unwrap();
  assert_eq!(all, vec![second]);
}

#[tokio::test]
async fn list_preserves_insertion_order() {
  let s = store().await;
  for name in ["Alice", "Bob", "Carol"] {
    s.put_inquiry(inquiry(name)).await.unwrap();
  }

  let names: Vec<String> = s
    .list_inquiries()
    .await
    .unwrap()
    .into_iter()
    .map(|i| i.user_name)
    .collect();
  assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

// ─── Tables ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stored_item_uses_record_field_names() {
  let s = store().await;
  let record = inquiry("Alice");
  let id = record.id.to_string();
  s.put_inquiry(record).await.unwrap();

  let item: String = s
    .conn
    .call(move |conn| {
      Ok(conn.query_row(
        "SELECT item FROM \"InquiryTable\" WHERE id = ?1",
        rusqlite::params![id],
        |row| row.get(0),
      )?)
    })
    .await
    .unwrap();

  let doc: serde_json::Value = serde_json::from_str(&item).unwrap();
  assert_eq!(doc["userName"], "Alice");
  assert_eq!(doc["createdAt"], doc["updatedAt"]);
}

#[tokio::test]
async fn open_rejects_invalid_table_name() {
  let result = SqliteStore::open_in_memory("bad\"name").await;
  assert!(matches!(result, Err(Error::InvalidTableName(_))));
}

#[tokio::test]
async fn custom_table_name_is_used() {
  let s = SqliteStore::open_in_memory("staging.inquiries").await.unwrap();
  assert_eq!(s.table_name(), "staging.inquiries");
  s.put_inquiry(inquiry("Alice")).await.unwrap();
  assert_eq!(s.list_inquiries().await.unwrap().len(), 1);
}

#[tokio::test]
async fn reopening_file_keeps_records() {
  let path = std::env::temp_dir().join(format!("inquiries-{}.db", Uuid::new_v4()));
  let record = inquiry("Alice");

  {
    let s = SqliteStore::open(&path, DEFAULT_TABLE_NAME).await.unwrap();
    s.put_inquiry(record.clone()).await.unwrap();
  }

  let s = SqliteStore::open(&path, DEFAULT_TABLE_NAME).await.unwrap();
  assert_eq!(s.get_inquiry(record.id).await.unwrap(), Some(record));
  drop(s);
  let _ = std::fs::remove_file(&path);
}
