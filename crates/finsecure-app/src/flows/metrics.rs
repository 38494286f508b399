//! Metrics flow
//!
//! Best-effort: a failed fetch is logged and stored as the all-zero snapshot,
//! never surfaced to the user.

use finsecure_core::prelude::*;
use finsecure_core::Metrics;

#[derive(Debug, Clone, Default)]
pub struct MetricsFlow {
    in_flight: usize,
    snapshot: Metrics,
    refreshes: u64,
}

impl MetricsFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as issued.
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Replace the snapshot with a fetch result.
    pub fn complete(&mut self, metrics: Metrics) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.snapshot = metrics;
        self.refreshes += 1;
    }

    /// True while any fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn snapshot(&self) -> &Metrics {
        &self.snapshot
    }

    /// Number of completed fetches since start-up
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }
}

/// Map a fetch result onto the value the flow stores.
pub fn resolve(result: Result<Metrics>) -> Metrics {
    result.unwrap_or_else(|e| {
        if e.is_recoverable() {
            warn!("Failed to fetch metrics: {}", e);
        } else {
            error!("Failed to fetch metrics: {}", e);
        }
        Metrics::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metrics {
        Metrics {
            total_tests: 5,
            passed_tests: 4,
            failed_tests: 1,
            total_recommendations: 9,
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_replaces_snapshot() {
        let mut flow = MetricsFlow::new();
        flow.begin();
        assert!(flow.is_loading());

        flow.complete(sample());

        assert!(!flow.is_loading());
        assert_eq!(flow.snapshot().total_tests, 5);
        assert_eq!(flow.refresh_count(), 1);
    }

    #[test]
    fn test_repeated_refresh_is_idempotent() {
        let mut flow = MetricsFlow::new();
        flow.begin();
        flow.complete(sample());
        let first = flow.snapshot().clone();

        flow.begin();
        flow.complete(sample());

        assert_eq!(flow.snapshot(), &first);
    }

    #[test]
    fn test_overlapping_fetches_keep_loading_until_last() {
        let mut flow = MetricsFlow::new();
        flow.begin();
        flow.begin();

        flow.complete(sample());
        assert!(flow.is_loading());

        flow.complete(sample());
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_failure_resolves_to_zero_snapshot() {
        let metrics = resolve(Err(Error::backend("http://x", "Database connection failed")));
        assert_eq!(metrics, Metrics::default());
    }
}
