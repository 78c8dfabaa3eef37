//! Error types for the sifter crate.
//!
//! Query evaluation never fails; these errors only come from loading a
//! snapshot out of serialized input.

use thiserror::Error;

/// Errors that can occur when loading a snapshot.
#[derive(Debug, Error)]
pub enum SifterError {
    /// Input was not a JSON array of strings and numbers.
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sifter operations.
pub type Result<T> = std::result::Result<T, SifterError>;
