//! SQLite backend for the inquiry store.
//!
//! Each configured table is a schemaless key-value collection: the primary
//! key is the inquiry id and the value is the record's JSON document. Access
//! goes through [`tokio_rusqlite`] so queries run on a dedicated thread
//! without blocking the async runtime.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use schema::DEFAULT_TABLE_NAME;
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
