//! Synthetic metrics primitives.
//!
//! This module hosts the pieces the backend assembles per request:
//! - `snapshot`: the JSON response model.
//! - `sampler`: uniform draws for the three simulated series.
//! - `counter`: the process-wide request counter.

pub mod counter;
pub mod sampler;
pub mod snapshot;

pub use counter::RequestCounter;
pub use sampler::{FixedLoad, LoadSampler, SyntheticLoad, UniformSampler};
pub use snapshot::MetricsSnapshot;
