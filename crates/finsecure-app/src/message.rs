//! Message types for the application (TEA pattern)

use finsecure_core::{HistoryEntry, Metrics, RecommendationOutcome, TestSuite};

use crate::flows::{HealthCheck, RequestSeq, RunId, TestRunOutcome};
use crate::input_key::InputKey;
use crate::state::DashboardTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session / View
    // ─────────────────────────────────────────────────────────
    /// Check operator credentials
    Authenticate { username: String, password: String },

    SignOut,

    SelectTab(DashboardTab),

    /// Authenticated operator switches to the client view
    ShowClientView,

    /// Authenticated operator returns to the dashboard
    ShowDashboard,

    // ─────────────────────────────────────────────────────────
    // Client view input
    // ─────────────────────────────────────────────────────────
    /// Type into the focused text field
    InputChar(char),
    InputBackspace,
    FocusNext,
    FocusPrevious,
    AdjustRiskScore(i64),

    // ─────────────────────────────────────────────────────────
    // Recommendation Flow
    // ─────────────────────────────────────────────────────────
    SubmitRecommendation,
    RecommendationResolved {
        seq: RequestSeq,
        outcome: RecommendationOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Test Execution Flow
    // ─────────────────────────────────────────────────────────
    RunTestSuite(TestSuite),
    TestRunResolved {
        run_id: RunId,
        outcome: TestRunOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Metrics / History / Health
    // ─────────────────────────────────────────────────────────
    RefreshMetrics,
    MetricsResolved(Metrics),

    RefreshHistory,
    HistoryResolved(Vec<HistoryEntry>),

    /// Probe `/health` (explicit user action only)
    CheckHealth,
    HealthResolved(HealthCheck),
}
