//! Test utilities for code that talks to the backend
//!
//! Provides [`ScriptedApiClient`], an in-memory [`ApiClient`] that answers
//! every call with a canned response and counts the calls it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use finsecure_core::prelude::*;
use finsecure_core::{
    HealthStatus, HistoryEntry, Metrics, Recommendation, RecommendationRequest, TestReport,
    TestSuite,
};

use crate::client::ApiClient;

/// Canned answer for one operation
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    /// Backend answers successfully
    Reply(T),
    /// Backend cannot be reached (transport failure with this reason)
    Unreachable(String),
    /// Backend answers with an `error` field
    Rejected(String),
}

impl<T: Clone> Scripted<T> {
    fn resolve(&self, base_url: &str) -> Result<T> {
        match self {
            Scripted::Reply(value) => Ok(value.clone()),
            Scripted::Unreachable(reason) => Err(Error::transport(base_url, reason.clone())),
            Scripted::Rejected(message) => Err(Error::backend(base_url, message.clone())),
        }
    }
}

/// Number of calls received per operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub recommend: usize,
    pub run_tests: usize,
    pub metrics: usize,
    pub history: usize,
    pub health: usize,
}

/// In-memory [`ApiClient`] with scripted responses
#[derive(Debug)]
pub struct ScriptedApiClient {
    base_url: String,
    recommendation: Scripted<Recommendation>,
    test_report: Scripted<TestReport>,
    metrics: Scripted<Metrics>,
    history: Scripted<Vec<HistoryEntry>>,
    health: Scripted<HealthStatus>,
    recommend_calls: AtomicUsize,
    run_tests_calls: AtomicUsize,
    metrics_calls: AtomicUsize,
    history_calls: AtomicUsize,
    health_calls: AtomicUsize,
    last_request: Mutex<Option<RecommendationRequest>>,
    last_suite: Mutex<Option<TestSuite>>,
}

impl ScriptedApiClient {
    /// A healthy backend: Bonds at 50, empty test output, zero metrics, empty history.
    pub fn new() -> Self {
        Self {
            base_url: "http://backend.test".to_string(),
            recommendation: Scripted::Reply(Recommendation {
                portfolio_type: "Bonds".to_string(),
                risk_score: 50,
            }),
            test_report: Scripted::Reply(TestReport::default()),
            metrics: Scripted::Reply(Metrics::default()),
            history: Scripted::Reply(Vec::new()),
            health: Scripted::Reply(HealthStatus {
                status: "healthy".to_string(),
                database: "connected".to_string(),
                timestamp: None,
            }),
            recommend_calls: AtomicUsize::new(0),
            run_tests_calls: AtomicUsize::new(0),
            metrics_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            health_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            last_suite: Mutex::new(None),
        }
    }

    /// Every operation fails as if nothing listened at the address.
    pub fn unreachable(reason: &str) -> Self {
        let reason = reason.to_string();
        Self::new()
            .with_recommendation(Scripted::Unreachable(reason.clone()))
            .with_test_report(Scripted::Unreachable(reason.clone()))
            .with_metrics(Scripted::Unreachable(reason.clone()))
            .with_history(Scripted::Unreachable(reason.clone()))
            .with_health(Scripted::Unreachable(reason))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_recommendation(mut self, reply: Scripted<Recommendation>) -> Self {
        self.recommendation = reply;
        self
    }

    pub fn with_test_report(mut self, reply: Scripted<TestReport>) -> Self {
        self.test_report = reply;
        self
    }

    pub fn with_metrics(mut self, reply: Scripted<Metrics>) -> Self {
        self.metrics = reply;
        self
    }

    pub fn with_history(mut self, reply: Scripted<Vec<HistoryEntry>>) -> Self {
        self.history = reply;
        self
    }

    pub fn with_health(mut self, reply: Scripted<HealthStatus>) -> Self {
        self.health = reply;
        self
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            recommend: self.recommend_calls.load(Ordering::SeqCst),
            run_tests: self.run_tests_calls.load(Ordering::SeqCst),
            metrics: self.metrics_calls.load(Ordering::SeqCst),
            history: self.history_calls.load(Ordering::SeqCst),
            health: self.health_calls.load(Ordering::SeqCst),
        }
    }

    /// The most recent recommendation request, as the caller built it
    pub fn last_request(&self) -> Option<RecommendationRequest> {
        self.last_request.lock().ok().and_then(|r| r.clone())
    }

    pub fn last_suite(&self) -> Option<TestSuite> {
        self.last_suite.lock().ok().and_then(|s| *s)
    }
}

impl Default for ScriptedApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient for ScriptedApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_recommendation(
        &self,
        request: RecommendationRequest,
    ) -> Result<Recommendation> {
        self.recommend_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request);
        }
        self.recommendation.resolve(&self.base_url)
    }

    async fn run_test_suite(&self, suite: TestSuite) -> Result<TestReport> {
        self.run_tests_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_suite.lock() {
            *last = Some(suite);
        }
        self.test_report.resolve(&self.base_url)
    }

    async fn fetch_metrics(&self) -> Result<Metrics> {
        self.metrics_calls.fetch_add(1, Ordering::SeqCst);
        self.metrics.resolve(&self.base_url)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history.resolve(&self.base_url)
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.health.resolve(&self.base_url)
    }
}
