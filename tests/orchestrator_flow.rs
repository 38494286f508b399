//! End-to-end orchestration tests against a mock backend
//!
//! Messages go through `process_message` exactly as the TUI loop sends them,
//! with the real HTTP client talking to wiremock.
//!
//! Run with: cargo test --test orchestrator_flow

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use finsecure_api::HttpApiClient;
use finsecure_app::{process_message, AppState, DashboardTab, Message, OrchestratorState};
use finsecure_core::{RecommendationOutcome, TestSuite};

const STEP_TIMEOUT: Duration = Duration::from_secs(5);

struct Harness {
    state: AppState,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    client: Arc<HttpApiClient>,
}

impl Harness {
    fn new(base_url: &str) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let client = Arc::new(HttpApiClient::new(base_url).unwrap());
        let state = AppState::with_settings(Default::default(), client_base(&client));
        Self {
            state,
            tx,
            rx,
            client,
        }
    }

    fn send(&mut self, msg: Message) {
        process_message(&mut self.state, msg, &self.tx, &self.client);
    }

    /// Feed completions back in until `done` holds.
    async fn pump_until(&mut self, done: impl Fn(&AppState) -> bool) {
        while !done(&self.state) {
            let msg = tokio::time::timeout(STEP_TIMEOUT, self.rx.recv())
                .await
                .expect("timed out waiting for a completion")
                .expect("channel closed");
            process_message(&mut self.state, msg, &self.tx, &self.client);
        }
    }

    fn sign_in(&mut self) {
        self.send(Message::Authenticate {
            username: "qa_admin".into(),
            password: "test123".into(),
        });
    }
}

fn client_base(client: &HttpApiClient) -> String {
    use finsecure_api::ApiClient;
    client.base_url().to_string()
}

/// An address nothing listens on: bind an ephemeral port, then release it.
fn unreachable_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn metrics_body(total: u64) -> serde_json::Value {
    json!({
        "total_tests": total,
        "passed_tests": total,
        "failed_tests": 0,
        "total_recommendations": 2,
        "recent_tests": [],
        "portfolio_distribution": []
    })
}

#[tokio::test]
async fn test_sign_in_and_test_run_refresh_metrics_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body(1)))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/run-tests"))
        .and(query_param("type", "compliance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "test_boundary_values PASSED\n1 passed in 0.05s",
            "return_code": 0,
            "test_type": "compliance"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut h = Harness::new(&server.uri());

    h.sign_in();
    assert_eq!(
        h.state.orchestrator_state(),
        OrchestratorState::AuthenticatedDashboard(DashboardTab::Tests)
    );
    h.pump_until(|s| s.metrics.refresh_count() == 1).await;
    assert_eq!(h.state.metrics.snapshot().total_tests, 1);

    h.send(Message::RunTestSuite(TestSuite::Compliance));
    assert!(h.state.test_run.is_running());
    h.pump_until(|s| !s.test_run.is_running()).await;
    assert!(h.state.test_run.output().contains("1 passed"));
    assert_eq!(h.state.test_run.last_return_code(), Some(0));

    // The deferred refresh arrives about a second after the run ends
    h.pump_until(|s| s.metrics.refresh_count() == 2 && !s.metrics.is_loading())
        .await;

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(h.rx.try_recv().is_err(), "refresh must fire only once");
}

#[tokio::test]
async fn test_users_tab_loads_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body(0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [
                {"id": 2, "name": "Jane Doe", "risk_score": 20,
                 "portfolio_type": "Bonds", "timestamp": "Tue, 14 Jan 2025 10:30:00 GMT"},
                {"id": 1, "name": "Anonymous User", "risk_score": 90,
                 "portfolio_type": "Stocks", "timestamp": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut h = Harness::new(&server.uri());
    h.sign_in();
    h.send(Message::SelectTab(DashboardTab::Users));

    h.pump_until(|s| !s.history.is_loading() && !s.metrics.is_loading())
        .await;

    let entries = h.state.history.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].client_name, "Jane Doe");
    assert!(entries[1].timestamp.is_none());
}

#[tokio::test]
async fn test_recommendation_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Jane Doe",
            "risk_score": 35,
            "portfolio_type": "Balanced",
            "timestamp": "2025-01-14T10:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut h = Harness::new(&server.uri());
    h.state.client_name = "Jane Doe".into();
    h.send(Message::AdjustRiskScore(-15));
    h.send(Message::SubmitRecommendation);
    assert!(h.state.recommendation.is_loading());

    h.pump_until(|s| !s.recommendation.is_loading()).await;

    let rec = h.state.recommendation.recommendation().unwrap();
    assert_eq!(rec.portfolio_type, "Balanced");
    assert_eq!(rec.risk_score, 35);
}

#[tokio::test]
async fn test_unreachable_backend_degrades_each_flow() {
    let base_url = unreachable_address();
    let mut h = Harness::new(&base_url);

    h.send(Message::SubmitRecommendation);
    h.pump_until(|s| !s.recommendation.is_loading()).await;
    let Some(RecommendationOutcome::Error(err)) = h.state.recommendation.outcome() else {
        panic!("expected an error outcome");
    };
    assert!(err.message.contains(&base_url));

    h.sign_in();
    h.pump_until(|s| !s.metrics.is_loading()).await;
    assert_eq!(h.state.metrics.snapshot().total_tests, 0);

    h.send(Message::RunTestSuite(TestSuite::Security));
    h.pump_until(|s| !s.test_run.is_running()).await;
    let output = h.state.test_run.output();
    assert!(output.starts_with("Error: "));
    assert!(output.contains(&format!("Ensure backend service is active at {}", base_url)));
}
