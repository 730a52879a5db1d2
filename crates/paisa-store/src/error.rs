//! # Persistence Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Propagation                               │
//! │                                                                     │
//! │  io::Error / serde_json::Error                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the storage key as context         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  caller retries or notifies the user; nothing is retried            │
//! │  automatically and no failure is fatal to the process               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain errors ([`CoreError`]) pass through unchanged via `#[from]`, so a
//! caller can always tell "bad input" apart from "storage broke".

use paisa_core::CoreError;
use thiserror::Error;

/// Persistence layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read from the underlying store failed.
    #[error("storage read failed for '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    /// A write to the underlying store failed.
    ///
    /// Writes are whole-value replacements staged through a temp file, so
    /// the previously persisted value is still intact after this error.
    #[error("storage write failed for '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// A persisted value could not be decoded.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated storage file
    /// - A record written by an incompatible version
    #[error("stored value under '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// Domain error (validation, lookup, empty cart, auth).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a ReadFailed error for a key.
    pub fn read_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::ReadFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a WriteFailed error for a key.
    pub fn write_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::WriteFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a Corrupt error for a key.
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
