//! Core domain types for the FinSecure console

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::timestamp;

/// Client name sent to the backend when the user leaves the identifier blank.
///
/// Outbound only: it never appears in a value returned to the caller.
pub const ANONYMOUS_CLIENT_NAME: &str = "Anonymous User";

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation
// ─────────────────────────────────────────────────────────────────────────────

/// Risk tolerance on the `0..=100` scale (0 = conservative, 100 = aggressive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MIN: RiskScore = RiskScore(0);
    pub const MAX: RiskScore = RiskScore(100);

    /// Build a score, clamping out-of-range input into `0..=100`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift the score by `delta`, saturating at the bounds.
    pub fn adjust(self, delta: i64) -> Self {
        Self::new(i64::from(self.0) + delta)
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the user asks the advisory engine for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub risk_score: RiskScore,
    pub client_name: String,
}

impl RecommendationRequest {
    pub fn new(risk_score: RiskScore, client_name: impl Into<String>) -> Self {
        Self {
            risk_score,
            client_name: client_name.into(),
        }
    }

    /// Name to put on the wire: the anonymous sentinel when the field is empty.
    pub fn outbound_name(&self) -> &str {
        if self.client_name.is_empty() {
            ANONYMOUS_CLIENT_NAME
        } else {
            &self.client_name
        }
    }
}

/// A portfolio strategy returned by the advisory engine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recommendation {
    pub portfolio_type: String,
    pub risk_score: i64,
}

/// A failed recommendation, rendered to the user verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResult {
    pub message: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Exactly one of a recommendation or an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    Recommendation(Recommendation),
    Error(ErrorResult),
}

// ─────────────────────────────────────────────────────────────────────────────
// Test execution
// ─────────────────────────────────────────────────────────────────────────────

/// Backend test suites the operator can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestSuite {
    Compliance,
    Security,
}

impl TestSuite {
    pub const ALL: [TestSuite; 2] = [TestSuite::Compliance, TestSuite::Security];

    /// Value of the `type` query parameter
    pub fn as_query(self) -> &'static str {
        match self {
            TestSuite::Compliance => "compliance",
            TestSuite::Security => "security",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TestSuite::Compliance => "Compliance Suite",
            TestSuite::Security => "Security Suite",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TestSuite::Compliance => "Run boundary value analysis and regulatory checks.",
            TestSuite::Security => "Execute injection attacks and penetration tests.",
        }
    }
}

impl fmt::Display for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Text returned by a test-suite run when no output or error was sent
pub const NO_TEST_OUTPUT: &str = "No output received";

/// Body of a completed `/run-tests` exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestReport {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub return_code: Option<i32>,
    #[serde(default)]
    pub test_type: Option<String>,
}

impl TestReport {
    /// Console text for this report: output, else error, else a fixed fallback.
    ///
    /// Empty strings count as absent.
    pub fn console_text(&self) -> &str {
        [self.output.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(NO_TEST_OUTPUT)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome recorded for one test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Other(String),
}

impl From<&str> for TestStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "passed" => TestStatus::Passed,
            "failed" => TestStatus::Failed,
            other => TestStatus::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for TestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TestStatus::from(raw.as_str()))
    }
}

/// One row of the recent test log
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestLogEntry {
    #[serde(default)]
    pub test_name: String,
    #[serde(default)]
    pub test_type: String,
    pub status: TestStatus,
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Recommendation count per portfolio type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioShare {
    pub portfolio_type: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub avg_risk_score: Option<f64>,
}

/// Aggregated test metrics; `Default` is the all-zero "unknown" snapshot
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub total_tests: u64,
    #[serde(default)]
    pub passed_tests: u64,
    #[serde(default)]
    pub failed_tests: u64,
    #[serde(default)]
    pub total_recommendations: u64,
    /// Server order, never re-sorted
    #[serde(default)]
    pub recent_tests: Vec<TestLogEntry>,
    #[serde(default)]
    pub portfolio_distribution: Vec<PortfolioShare>,
}

// ─────────────────────────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────────────────────────

/// One persisted recommendation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    #[serde(rename = "name", default)]
    pub client_name: String,
    pub risk_score: i64,
    pub portfolio_type: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub timestamp: Option<DateTime<Utc>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Numbers sometimes arrive as strings (database decimals); accept both.
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
