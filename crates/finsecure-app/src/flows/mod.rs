//! Request flows driven by the orchestrator
//!
//! Each flow owns the loading/result state of one kind of backend request.
//! Flows are plain state machines: the handler calls `begin`/`submit`/`start`
//! when a request is issued and the matching completion method when its
//! message comes back. Fields are private so only the flow itself can touch
//! its loading flag.
//!
//! - `recommendation`: one advisory request at a time, latest-issued wins
//! - `test_run`: single in-flight test suite and its console output
//! - `metrics`: best-effort aggregate metrics snapshot
//! - `history`: best-effort recommendation history snapshot
//! - `health`: on-demand backend health probe

pub mod health;
pub mod history;
pub mod metrics;
pub mod recommendation;
pub mod test_run;

pub use health::{HealthCheck, HealthFlow};
pub use history::HistoryFlow;
pub use metrics::MetricsFlow;
pub use recommendation::{RecommendationFlow, RequestSeq};
pub use test_run::{RunId, TestRunFlow, TestRunOutcome, METRICS_REFRESH_DELAY};
