//! Wire format of the advisory backend
//!
//! Response bodies map straight onto the domain types in `finsecure_core`
//! where the field names agree; the envelopes and request bodies live here.

use finsecure_core::{HistoryEntry, RecommendationRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RECOMMEND_PATH: &str = "/recommend";
pub const RUN_TESTS_PATH: &str = "/run-tests";
pub const METRICS_PATH: &str = "/metrics";
pub const HISTORY_PATH: &str = "/recommendations";
pub const HEALTH_PATH: &str = "/health";

/// Body of `POST /recommend`
#[derive(Debug, Serialize)]
pub struct RecommendBody<'a> {
    pub risk_score: u8,
    pub name: &'a str,
}

impl<'a> From<&'a RecommendationRequest> for RecommendBody<'a> {
    fn from(request: &'a RecommendationRequest) -> Self {
        Self {
            risk_score: request.risk_score.value(),
            name: request.outbound_name(),
        }
    }
}

/// Body of `GET /recommendations`
#[derive(Debug, Deserialize)]
pub struct HistoryEnvelope {
    #[serde(default)]
    pub recommendations: Vec<HistoryEntry>,
}

/// The backend's application-error field, when present and non-empty
pub fn error_field(body: &Value) -> Option<&str> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
