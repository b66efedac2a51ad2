//! Metrics snapshot (JSON response model).
//!
//! Field order matters: clients chart the body as-is, so the serialized
//! keys must stay `cpu_usage`, `latency_ms`, `memory_usage_mb`,
//! `request_count`.

use serde::Serialize;

use crate::error::Result;
use crate::metrics::sampler::SyntheticLoad;

/// One synthetic metrics snapshot, serialized as the `/metrics` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Simulated CPU usage, percent.
    pub cpu_usage: u16,
    /// Simulated request latency, milliseconds.
    pub latency_ms: u16,
    /// Simulated resident memory, megabytes.
    pub memory_usage_mb: u16,
    /// Requests served since process start (post-increment counter value).
    pub request_count: u64,
}

impl MetricsSnapshot {
    /// Combine one sampler draw with the captured request count.
    pub fn new(load: SyntheticLoad, request_count: u64) -> Self {
        Self {
            cpu_usage: load.cpu_usage,
            latency_ms: load.latency_ms,
            memory_usage_mb: load.memory_usage_mb,
            request_count,
        }
    }

    /// Serialize to the JSON body. The caller decides what a failure maps
    /// to on the wire; nothing is written here.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
