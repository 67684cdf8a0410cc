//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases for file I/O, JSON
//! (de)serialization, lock poisoning and boundary validation, allowing crates to
//! propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the data file or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The data file exists but does not hold a JSON object of the expected shape.
    #[error("Corrupt database file {path}: {reason}")]
    CorruptDatabase {
        /// Path of the offending file.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// A required key is missing from the database.
    #[error("Database key not found: {0}")]
    MissingKey(String),

    /// `max_age_days` was negative.
    #[error("max_age_days must be a non-negative integer, got {0}")]
    InvalidMaxAge(i64),

    /// HTTP transport failure on the client side; contains a short context string.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A background task panicked or was cancelled before finishing.
    #[error("Background task failed: {0}")]
    Task(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
