//! Core types and trait definitions for the inquiry service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the API crate both depend on it.

// Native `async fn` in traits; the `Send` bounds are spelled out on the
// trait's return types.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod inquiry;
pub mod payload;
pub mod store;

pub use error::{Error, Result};
