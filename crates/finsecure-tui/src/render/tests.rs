//! Full-frame rendering tests

use chrono::{TimeZone, Utc};

use finsecure_app::flows::TestRunOutcome;
use finsecure_app::{AppState, DashboardTab, Message};
use finsecure_core::{
    HistoryEntry, Metrics, PortfolioShare, Recommendation, RecommendationOutcome, TestLogEntry,
    TestReport, TestStatus, TestSuite,
};

use super::view;
use crate::test_utils::{apply, signed_in_state, TestTerminal};

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen_shows_client_and_login() {
    let term = render(&AppState::new());

    assert!(term.buffer_contains("FinSecure"));
    assert!(term.buffer_contains("Client Portal"));
    assert!(term.buffer_contains("Operator Login"));
    assert!(term.buffer_contains("guest"));
    assert!(!term.buffer_contains("QA & Testing"));
}

#[test]
fn test_failed_login_shows_hint_and_stays_on_client_view() {
    let mut state = AppState::new();
    apply(
        &mut state,
        Message::Authenticate {
            username: "qa_admin".into(),
            password: "wrong".into(),
        },
    );

    let term = render(&state);

    assert!(term.buffer_contains("Invalid credentials"));
    assert!(term.buffer_contains("Operator Login"));
}

#[test]
fn test_dashboard_after_sign_in() {
    let mut state = signed_in_state();
    apply(
        &mut state,
        Message::MetricsResolved(Metrics {
            total_tests: 3,
            passed_tests: 2,
            failed_tests: 1,
            total_recommendations: 9,
            recent_tests: vec![TestLogEntry {
                test_name: "test_sql_injection".into(),
                test_type: "security".into(),
                status: TestStatus::Failed,
                timestamp: None,
            }],
            portfolio_distribution: vec![PortfolioShare {
                portfolio_type: "Balanced".into(),
                count: 9,
                avg_risk_score: Some(51.0),
            }],
        }),
    );

    let term = render(&state);

    assert!(term.buffer_contains("QA & Testing"));
    assert!(term.buffer_contains("User Data"));
    assert!(term.buffer_contains("operator"));
    assert!(term.buffer_contains("test_sql_injection"));
    assert!(term.buffer_contains("51.0"));
    assert!(!term.buffer_contains("Operator Login"));
}

#[test]
fn test_console_shows_finished_run() {
    let mut state = signed_in_state();
    apply(&mut state, Message::RunTestSuite(TestSuite::Security));
    apply(
        &mut state,
        Message::TestRunResolved {
            run_id: 1,
            outcome: TestRunOutcome::Completed(TestReport {
                output: Some("collected 6 items\n6 passed".into()),
                return_code: Some(0),
                ..Default::default()
            }),
        },
    );

    let term = render(&state);

    assert!(term.buffer_contains("6 passed"));
    assert!(term.buffer_contains("exit 0"));
}

#[test]
fn test_users_tab_lists_history() {
    let mut state = signed_in_state();
    apply(&mut state, Message::SelectTab(DashboardTab::Users));
    apply(
        &mut state,
        Message::HistoryResolved(vec![HistoryEntry {
            id: 42,
            client_name: "Jane Doe".into(),
            risk_score: 15,
            portfolio_type: "Bonds".into(),
            timestamp: Some(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap()),
        }]),
    );

    let term = render(&state);

    assert!(term.buffer_contains("Recommendation History (1)"));
    assert!(term.buffer_contains("Jane Doe"));
    assert!(term.buffer_contains("Bonds"));
}

#[test]
fn test_signed_in_client_view_hides_login() {
    let mut state = signed_in_state();
    apply(&mut state, Message::ShowClientView);
    apply(&mut state, Message::SubmitRecommendation);
    apply(
        &mut state,
        Message::RecommendationResolved {
            seq: 1,
            outcome: RecommendationOutcome::Recommendation(Recommendation {
                portfolio_type: "Stocks".into(),
                risk_score: 50,
            }),
        },
    );

    let term = render(&state);

    assert!(term.buffer_contains("Client Portal"));
    assert!(term.buffer_contains("Stocks"));
    assert!(!term.buffer_contains("Operator Login"));
}
