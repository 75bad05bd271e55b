use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simple counter of the Riot API requests performed by a client.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    count: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Record one request and return the running total.
    pub fn inc(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
