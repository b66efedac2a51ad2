//! Process-wide request counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free request counter. Starts at zero; never reset.
///
/// `record` is a single fetch-and-add returning the post-increment value,
/// so concurrent requests each observe a unique, gap-free count.
#[derive(Debug, Default)]
pub struct RequestCounter(AtomicU64);

impl RequestCounter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Count one request and return the post-increment value.
    pub fn record(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current value without counting a request.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
