//! Uniform draws for the three simulated series.

use std::ops::Range;

use rand::Rng;

/// Simulated CPU usage bounds, percent. Upper bound exclusive.
pub const CPU_USAGE_PERCENT: Range<u16> = 0..100;
/// Simulated latency bounds, milliseconds. Upper bound exclusive.
pub const LATENCY_MS: Range<u16> = 0..300;
/// Simulated memory bounds, megabytes. Upper bound exclusive.
pub const MEMORY_MB: Range<u16> = 100..4000;

/// One draw of the three simulated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticLoad {
    pub cpu_usage: u16,
    pub latency_ms: u16,
    pub memory_usage_mb: u16,
}

/// Trait producing one set of synthetic load figures per request.
pub trait LoadSampler: Send + Sync {
    fn sample(&self) -> SyntheticLoad;
}

/// Uniform sampler backed by the thread-local generator.
///
/// Each worker thread keeps an independently seeded generator, so draws
/// need no synchronization across concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampler;

impl LoadSampler for UniformSampler {
    fn sample(&self) -> SyntheticLoad {
        let mut rng = rand::rng();
        SyntheticLoad {
            cpu_usage: rng.random_range(CPU_USAGE_PERCENT),
            latency_ms: rng.random_range(LATENCY_MS),
            memory_usage_mb: rng.random_range(MEMORY_MB),
        }
    }
}

/// Constant sampler for tests and deterministic demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedLoad(pub SyntheticLoad);

impl LoadSampler for FixedLoad {
    fn sample(&self) -> SyntheticLoad {
        self.0
    }
}
