//! Recommendation flow
//!
//! Every submission gets a monotonically increasing [`RequestSeq`]. Only the
//! completion carrying the latest issued sequence is stored; older ones are
//! dropped, so rapid resubmission can never leave a stale result on screen.

use finsecure_core::prelude::*;
use finsecure_core::{ErrorResult, Recommendation, RecommendationOutcome};

/// Sequence number of a submitted recommendation request
pub type RequestSeq = u64;

#[derive(Debug, Clone, Default)]
pub struct RecommendationFlow {
    last_issued: RequestSeq,
    loading: bool,
    outcome: Option<RecommendationOutcome>,
}

impl RecommendationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request: clears the previous result and raises the loading flag.
    pub fn submit(&mut self) -> RequestSeq {
        self.last_issued += 1;
        self.loading = true;
        self.outcome = None;
        self.last_issued
    }

    /// Store the outcome of request `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer request has been
    /// issued since.
    pub fn resolve(&mut self, seq: RequestSeq, outcome: RecommendationOutcome) -> bool {
        if seq != self.last_issued {
            debug!(
                "Discarding stale recommendation #{} (latest is #{})",
                seq, self.last_issued
            );
            return false;
        }
        self.outcome = Some(outcome);
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `None` until the first request resolves
    pub fn outcome(&self) -> Option<&RecommendationOutcome> {
        self.outcome.as_ref()
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.outcome {
            Some(RecommendationOutcome::Recommendation(rec)) => Some(rec),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResult> {
        match &self.outcome {
            Some(RecommendationOutcome::Error(err)) => Some(err),
            _ => None,
        }
    }
}

/// Fold an API result into the flow's outcome; errors keep their full message,
/// which names the backend address.
pub fn outcome_from(result: Result<Recommendation>) -> RecommendationOutcome {
    match result {
        Ok(rec) => RecommendationOutcome::Recommendation(rec),
        Err(e) => {
            warn!("Recommendation request failed: {}", e);
            RecommendationOutcome::Error(ErrorResult::new(e.to_string()))
        }
    }
}
