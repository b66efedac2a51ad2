//! Shared error type across pulsemock crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulseMockError>;

/// Unified error type used by core and backend.
#[derive(Debug, Error)]
pub enum PulseMockError {
    /// Response body could not be serialized. The client only ever sees a
    /// generic 500; the cause stays in the local log.
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("internal: {0}")]
    Internal(String),
}
