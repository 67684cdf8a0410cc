//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error`: unified error type `QuoteError` used across the workspace.
//! - `result`: handy `Result<T, QuoteError>` alias.
//! - `quote`: the `Quote` record and timestamp parsing.
//! - `filter`: age-windowed retrieval and the malformed-timestamp policy.
//! - `database`: JSON file-backed key/value store.
//! - `store`: `QuoteStore`, submission and retrieval over the database.
//! - `clock`: injectable time source.
//! - `api`: HTTP request/response payloads.
//! - `net`: routes, defaults and small helpers.
#![warn(missing_docs)]
pub mod api;
pub mod clock;
pub mod database;
pub mod error;
pub mod filter;
pub mod net;
pub mod quote;
pub mod result;
pub mod store;

pub use error::QuoteError;
pub use filter::{MalformedPolicy, MaxAge, filter_quotes};
pub use quote::Quote;
pub use result::Result;
pub use store::QuoteStore;
