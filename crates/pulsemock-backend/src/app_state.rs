//! Shared application state for the pulsemock backend.

use std::sync::Arc;

use pulsemock_core::metrics::{LoadSampler, RequestCounter};

/// Cheaply cloneable handle to the process-wide state.
///
/// The sampler is injected so tests and demos can swap the uniform draws
/// for a fixed one; the counter is the only mutable piece and is lock-free.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    counter: RequestCounter,
    sampler: Arc<dyn LoadSampler>,
}

impl AppState {
    pub fn new(sampler: Arc<dyn LoadSampler>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                counter: RequestCounter::new(),
                sampler,
            }),
        }
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.inner.counter
    }

    pub fn sampler(&self) -> &dyn LoadSampler {
        self.inner.sampler.as_ref()
    }
}
