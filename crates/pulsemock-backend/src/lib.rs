//! pulsemock backend library entry.
//!
//! This crate wires the request counter, load sampler, and HTTP surface
//! into the demo backend. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod ops;
pub mod router;
