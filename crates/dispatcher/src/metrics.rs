//! Per-dispatcher counters

use std::sync::atomic::{AtomicU64, Ordering};

use crate::dispatcher::SuppressReason;

/// Counters for a single dispatcher
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Records accepted by the configured sink
    emitted: AtomicU64,
    /// Records written to standard output instead
    fallback: AtomicU64,
    /// Sink errors (each one is followed by a fallback attempt)
    sink_failures: AtomicU64,
    /// Records lost because the fallback failed too
    dropped: AtomicU64,
    /// Messages stopped by the production gate
    suppressed_gated: AtomicU64,
    /// Messages more verbose than the threshold
    suppressed_threshold: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    pub fn inc_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fallback(&self) -> u64 {
        self.fallback.load(Ordering::Relaxed)
    }

    pub fn inc_fallback(&self) {
        self.fallback.fetch_add(1, Ordering::Relaxed);
    }

    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    pub fn inc_sink_failures(&self) {
        self.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn inc_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a suppression; `NoError` is not a suppression of a message and
    /// is ignored.
    pub fn inc_suppressed(&self, reason: SuppressReason) {
        let counter = match reason {
            SuppressReason::ProductionGate => &self.suppressed_gated,
            SuppressReason::AboveThreshold => &self.suppressed_threshold,
            SuppressReason::NoError => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            emitted: self.emitted(),
            fallback: self.fallback(),
            sink_failures: self.sink_failures(),
            dropped: self.dropped(),
            suppressed_gated: self.suppressed_gated.load(Ordering::Relaxed),
            suppressed_threshold: self.suppressed_threshold.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of dispatcher counters (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub emitted: u64,
    pub fallback: u64,
    pub sink_failures: u64,
    pub dropped: u64,
    pub suppressed_gated: u64,
    pub suppressed_threshold: u64,
}

impl MetricsSnapshot {
    /// Messages that reached any output
    pub fn delivered(&self) -> u64 {
        self.emitted + self.fallback
    }

    pub fn suppressed(&self) -> u64 {
        self.suppressed_gated + self.suppressed_threshold
    }
}
