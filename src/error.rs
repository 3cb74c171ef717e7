//! Error types for strict style-key parsing and preference storage.
//!
//! Components never surface these: lenient conversions substitute defaults
//! and storage failures are logged. They exist for callers that want to
//! validate keys up front (e.g. config files, tests).

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A style key that is not part of its family's fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleKeyError {
    #[error("unknown {family} key: {key:?}")]
    Unknown { family: &'static str, key: String },
}

/// Failure while persisting UI preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("local storage rejected write: {0}")]
    Storage(String),
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
