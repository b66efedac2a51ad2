//! pulsemock core: snapshot model, request counter, and load sampler.
//!
//! This crate defines the response data model and the shared-state
//! primitives used by the backend. It intentionally carries no HTTP or
//! runtime dependencies so the model can be reused by load tools and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PulseMockError`/`Result` so the
//! serving process does not crash while encoding a response.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{PulseMockError, Result};
