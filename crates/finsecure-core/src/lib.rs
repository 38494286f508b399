//! # finsecure-core - Core Domain Types
//!
//! Foundation crate for the FinSecure console. Provides domain types, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RiskScore`] - Risk tolerance clamped to `0..=100`
//! - [`RecommendationRequest`], [`Recommendation`], [`ErrorResult`] - Advisory exchange
//! - [`TestSuite`], [`TestReport`] - Backend test-suite execution
//! - [`Metrics`], [`TestLogEntry`], [`TestStatus`] - Aggregated test metrics
//! - [`HistoryEntry`] - One persisted recommendation
//! - [`HealthStatus`] - Backend health probe result
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with transport vs application classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use finsecure_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod timestamp;
pub mod types;

/// Prelude for common imports used throughout all FinSecure crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    ErrorResult, HealthStatus, HistoryEntry, Metrics, PortfolioShare, Recommendation,
    RecommendationOutcome, RecommendationRequest, RiskScore, TestLogEntry, TestReport, TestStatus,
    TestSuite, ANONYMOUS_CLIENT_NAME, NO_TEST_OUTPUT,
};
