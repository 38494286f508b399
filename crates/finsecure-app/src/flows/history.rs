//! History flow: full-replace snapshot of past recommendations

use finsecure_core::prelude::*;
use finsecure_core::HistoryEntry;

#[derive(Debug, Clone, Default)]
pub struct HistoryFlow {
    in_flight: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Replace the stored list; never merges with what was there before.
    pub fn complete(&mut self, entries: Vec<HistoryEntry>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.entries = entries;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Server order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

/// Map a fetch result onto the value the flow stores.
pub fn resolve(result: Result<Vec<HistoryEntry>>) -> Vec<HistoryEntry> {
    result.unwrap_or_else(|e| {
        if e.is_recoverable() {
            warn!("Failed to fetch recommendations: {}", e);
        } else {
            error!("Failed to fetch recommendations: {}", e);
        }
        Vec::new()
    })
}
