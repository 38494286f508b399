//! Test execution flow
//!
//! At most one suite runs at a time. Completing a run (successfully or not)
//! is what schedules the follow-up metrics refresh, so `complete` reports
//! whether the completion was accepted: a completion for an unknown or
//! already-finished run is ignored and must not schedule anything.

use std::time::Duration;

use finsecure_core::prelude::*;
use finsecure_core::{TestReport, TestSuite};

/// Identifier of one test-suite run
pub type RunId = u64;

/// How long the backend gets to persist a run before metrics are re-read
pub const METRICS_REFRESH_DELAY: Duration = Duration::from_millis(1000);

/// Console text while a suite is running
pub const RUNNING_PLACEHOLDER: &str =
    "Initializing test environment...\nRunning automated checks...\n";

/// How a run ended, as delivered back to the update loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestRunOutcome {
    /// The backend answered (possibly with an `error` field)
    Completed(TestReport),
    /// The backend could not be reached; the text is ready for the console
    Unreachable { diagnostic: String },
}

#[derive(Debug, Clone, Default)]
pub struct TestRunFlow {
    next_id: RunId,
    running: Option<(RunId, TestSuite)>,
    output: String,
    last_suite: Option<TestSuite>,
    last_return_code: Option<i32>,
}

impl TestRunFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `suite`, or return `None` while another run is outstanding.
    pub fn start(&mut self, suite: TestSuite) -> Option<RunId> {
        if let Some((id, active)) = self.running {
            debug!("Ignoring {} run request: run #{} ({}) in flight", suite, id, active);
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.running = Some((id, suite));
        self.last_suite = Some(suite);
        self.last_return_code = None;
        self.output = RUNNING_PLACEHOLDER.to_string();
        Some(id)
    }

    /// Record the end of run `id`. Returns `true` when the completion matched
    /// the in-flight run.
    pub fn complete(&mut self, id: RunId, outcome: TestRunOutcome) -> bool {
        match self.running {
            Some((active, _)) if active == id => {}
            _ => {
                warn!("Ignoring completion for unknown test run #{}", id);
                return false;
            }
        }
        self.running = None;
        match outcome {
            TestRunOutcome::Completed(report) => {
                self.output = report.console_text().to_string();
                self.last_return_code = report.return_code;
            }
            TestRunOutcome::Unreachable { diagnostic } => {
                self.output = diagnostic;
            }
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn running_suite(&self) -> Option<TestSuite> {
        self.running.map(|(_, suite)| suite)
    }

    /// Console text; empty before the first run
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn last_suite(&self) -> Option<TestSuite> {
        self.last_suite
    }

    pub fn last_return_code(&self) -> Option<i32> {
        self.last_return_code
    }
}

/// Console diagnostic for a run that never reached the backend
pub fn transport_diagnostic(reason: &str, base_url: &str) -> String {
    format!(
        "Error: {}\n[SYSTEM ALERT]: Ensure backend service is active at {}.",
        reason, base_url
    )
}

/// Fold an API result into a run outcome.
pub fn outcome_from(result: Result<TestReport>, base_url: &str) -> TestRunOutcome {
    match result {
        Ok(report) => TestRunOutcome::Completed(report),
        Err(e) => {
            warn!("Test run failed: {}", e);
            TestRunOutcome::Unreachable {
                diagnostic: transport_diagnostic(&e.reason(), base_url),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(output: &str) -> TestRunOutcome {
        TestRunOutcome::Completed(TestReport {
            output: Some(output.to_string()),
            return_code: Some(0),
            ..Default::default()
        })
    }

    #[test]
    fn test_start_sets_placeholder_and_running() {
        let mut flow = TestRunFlow::new();
        assert_eq!(flow.output(), "");

        let id = flow.start(TestSuite::Compliance);

        assert!(id.is_some());
        assert!(flow.is_running());
        assert_eq!(flow.output(), RUNNING_PLACEHOLDER);
        assert_eq!(flow.running_suite(), Some(TestSuite::Compliance));
    }

    #[test]
    fn test_second_start_is_refused_while_running() {
        let mut flow = TestRunFlow::new();
        flow.start(TestSuite::Compliance);
        assert!(flow.start(TestSuite::Security).is_none());
        assert_eq!(flow.running_suite(), Some(TestSuite::Compliance));
    }

    #[test]
    fn test_complete_replaces_output_and_clears_running() {
        let mut flow = TestRunFlow::new();
        let id = flow.start(TestSuite::Security).unwrap();

        assert!(flow.complete(id, report("1 passed")));

        assert!(!flow.is_running());
        assert_eq!(flow.output(), "1 passed");
        assert_eq!(flow.last_return_code(), Some(0));
        assert_eq!(flow.last_suite(), Some(TestSuite::Security));
    }

    #[test]
    fn test_empty_report_uses_fallback_text() {
        let mut flow = TestRunFlow::new();
        let id = flow.start(TestSuite::Security).unwrap();
        flow.complete(id, TestRunOutcome::Completed(TestReport::default()));
        assert_eq!(flow.output(), "No output received");
    }

    #[test]
    fn test_duplicate_completion_is_rejected() {
        let mut flow = TestRunFlow::new();
        let id = flow.start(TestSuite::Compliance).unwrap();
        assert!(flow.complete(id, report("ok")));
        assert!(!flow.complete(id, report("again")));
        assert_eq!(flow.output(), "ok");
    }

    #[test]
    fn test_unreachable_diagnostic_names_backend() {
        let outcome = outcome_from(
            Err(Error::transport("http://localhost:5000", "connection refused")),
            "http://localhost:5000",
        );
        let TestRunOutcome::Unreachable { diagnostic } = outcome else {
            panic!("expected unreachable outcome");
        };
        insta::assert_snapshot!(diagnostic, @r"
        Error: connection refused
        [SYSTEM ALERT]: Ensure backend service is active at http://localhost:5000.
        ");
    }

    #[test]
    fn test_runs_get_distinct_ids() {
        let mut flow = TestRunFlow::new();
        let first = flow.start(TestSuite::Compliance).unwrap();
        flow.complete(first, report("a"));
        let second = flow.start(TestSuite::Compliance).unwrap();
        assert_ne!(first, second);
    }
}
