//! Backend client trait and its reqwest implementation

use finsecure_core::prelude::*;
use finsecure_core::{
    HealthStatus, HistoryEntry, Metrics, Recommendation, RecommendationRequest, TestReport,
    TestSuite,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::protocol::{self, HistoryEnvelope, RecommendBody};

/// Backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Operations offered by the advisory backend
///
/// Implementations translate transport failures into [`Error::Transport`] /
/// [`Error::InvalidResponse`] and backend-signalled failures into
/// [`Error::Backend`]; every message names [`base_url`](Self::base_url).
#[trait_variant::make(ApiClient: Send)]
pub trait LocalApiClient {
    /// Address every request is sent to (no trailing slash)
    fn base_url(&self) -> &str;

    /// `POST /recommend`
    async fn request_recommendation(
        &self,
        request: RecommendationRequest,
    ) -> Result<Recommendation>;

    /// `GET /run-tests?type=...`
    ///
    /// A reachable backend always yields a report, even when it carries an
    /// `error` field instead of output.
    async fn run_test_suite(&self, suite: TestSuite) -> Result<TestReport>;

    /// `GET /metrics`
    async fn fetch_metrics(&self) -> Result<Metrics>;

    /// `GET /recommendations`
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>>;

    /// `GET /health`
    async fn check_health(&self) -> Result<HealthStatus>;
}

/// [`ApiClient`] speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for `base_url`, which must be an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        Error::transport(&self.base_url, err.to_string())
    }

    /// Read the body as JSON, keeping the status for the caller to judge.
    async fn read_json(&self, response: reqwest::Response) -> Result<(StatusCode, Value)> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        let value = serde_json::from_str(&body).map_err(|e| {
            Error::invalid_response(&self.base_url, format!("HTTP {}: {}", status, e))
        })?;
        Ok((status, value))
    }

    /// Decode a body whose `error` field or non-success status means failure.
    fn decode_strict<T: DeserializeOwned>(&self, status: StatusCode, body: Value) -> Result<T> {
        if let Some(message) = protocol::error_field(&body) {
            return Err(Error::backend(&self.base_url, message));
        }
        if !status.is_success() {
            return Err(Error::backend(&self.base_url, format!("HTTP {}", status)));
        }
        serde_json::from_value(body).map_err(|e| Error::invalid_response(&self.base_url, e.to_string()))
    }

    async fn get_strict<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let (status, body) = self.read_json(response).await?;
        self.decode_strict(status, body)
    }
}

impl ApiClient for HttpApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_recommendation(
        &self,
        request: RecommendationRequest,
    ) -> Result<Recommendation> {
        debug!(
            "Requesting recommendation: risk_score={}, named={}",
            request.risk_score,
            !request.client_name.is_empty()
        );
        let response = self
            .http
            .post(self.endpoint(protocol::RECOMMEND_PATH))
            .json(&RecommendBody::from(&request))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let (status, body) = self.read_json(response).await?;
        self.decode_strict(status, body)
    }

    async fn run_test_suite(&self, suite: TestSuite) -> Result<TestReport> {
        info!("Running {} test suite", suite);
        let response = self
            .http
            .get(self.endpoint(protocol::RUN_TESTS_PATH))
            .query(&[("type", suite.as_query())])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let (status, body) = self.read_json(response).await?;
        if !status.is_success() {
            debug!("Test run answered with HTTP {}", status);
        }
        serde_json::from_value(body).map_err(|e| Error::invalid_response(&self.base_url, e.to_string()))
    }

    async fn fetch_metrics(&self) -> Result<Metrics> {
        self.get_strict(protocol::METRICS_PATH).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        let envelope: HistoryEnvelope = self.get_strict(protocol::HISTORY_PATH).await?;
        Ok(envelope.recommendations)
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        self.get_strict(protocol::HEALTH_PATH).await
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| Error::config(format!("Invalid backend address {:?}: {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "Backend address must use http or https: {}",
            raw
        )));
    }
    Ok(trimmed.to_string())
}
