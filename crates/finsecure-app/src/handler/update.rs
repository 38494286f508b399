//! Main update function - handles state transitions (TEA pattern)

use finsecure_core::prelude::*;
use finsecure_core::RecommendationRequest;

use crate::flows::METRICS_REFRESH_DELAY;
use crate::message::Message;
use crate::state::{AppPhase, DashboardTab, ViewMode};
use crate::AppState;

use super::{keys::handle_key, Task, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.any_loading() {
                state.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session / View
        // ─────────────────────────────────────────────────────────
        Message::Authenticate { username, password } => {
            if state.is_authenticated() {
                debug!("Authenticate ignored: already signed in");
                return UpdateResult::none();
            }
            state.credentials.username = username;
            state.credentials.password = password;
            if state.authenticate() {
                // Dashboard entry effect
                UpdateResult::message(Message::RefreshMetrics)
            } else {
                UpdateResult::none()
            }
        }

        Message::SignOut => {
            state.sign_out();
            UpdateResult::none()
        }

        Message::SelectTab(tab) => {
            if state.select_tab(tab) {
                debug!("Dashboard tab: {}", tab.label());
            }
            // Every Users selection reloads, including while already on Users
            if tab == DashboardTab::Users && state.view() == ViewMode::OperatorDashboard {
                UpdateResult::message(Message::RefreshHistory)
            } else {
                UpdateResult::none()
            }
        }

        Message::ShowClientView => {
            state.show_client_view();
            UpdateResult::none()
        }

        Message::ShowDashboard => {
            if state.show_dashboard() {
                UpdateResult::message(Message::RefreshMetrics)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Client view input
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            if let Some(text) = state.focused_text_mut() {
                text.push(c);
            }
            UpdateResult::none()
        }

        Message::InputBackspace => {
            if let Some(text) = state.focused_text_mut() {
                text.pop();
            }
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }

        Message::AdjustRiskScore(delta) => {
            state.risk_score = state.risk_score.adjust(delta);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Recommendation Flow
        // ─────────────────────────────────────────────────────────
        Message::SubmitRecommendation => {
            let seq = state.recommendation.submit();
            let request = RecommendationRequest::new(state.risk_score, state.client_name.clone());
            debug!("Submitting recommendation #{} (risk {})", seq, request.risk_score);
            UpdateResult::action(UpdateAction::SpawnTask(Task::Recommend { seq, request }))
        }

        Message::RecommendationResolved { seq, outcome } => {
            state.recommendation.resolve(seq, outcome);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Test Execution Flow
        // ─────────────────────────────────────────────────────────
        Message::RunTestSuite(suite) => {
            if !state.is_authenticated() {
                debug!("Ignoring {} run: not signed in", suite);
                return UpdateResult::none();
            }
            match state.test_run.start(suite) {
                Some(run_id) => {
                    info!("Starting {} suite (run #{})", suite, run_id);
                    UpdateResult::action(UpdateAction::SpawnTask(Task::RunTests { run_id, suite }))
                }
                None => UpdateResult::none(),
            }
        }

        Message::TestRunResolved { run_id, outcome } => {
            if state.test_run.complete(run_id, outcome) {
                UpdateResult::action(UpdateAction::ScheduleMetricsRefresh {
                    run_id,
                    delay: METRICS_REFRESH_DELAY,
                })
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Metrics / History / Health
        // ─────────────────────────────────────────────────────────
        Message::RefreshMetrics => {
            state.metrics.begin();
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchMetrics))
        }

        Message::MetricsResolved(metrics) => {
            state.metrics.complete(metrics);
            UpdateResult::none()
        }

        Message::RefreshHistory => {
            state.history.begin();
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchHistory))
        }

        Message::HistoryResolved(entries) => {
            state.history.complete(entries);
            UpdateResult::none()
        }

        Message::CheckHealth => {
            if state.health.begin() {
                UpdateResult::action(UpdateAction::SpawnTask(Task::CheckHealth))
            } else {
                UpdateResult::none()
            }
        }

        Message::HealthResolved(check) => {
            state.health.complete(check);
            UpdateResult::none()
        }
    }
}
