//! Application state (Model in TEA pattern)
//!
//! `AppState` is the orchestrator: it owns the session, the active view and
//! every request flow. Session and view are private so the only way into the
//! operator dashboard is through a successful credential check.

use std::sync::Arc;

use finsecure_api::DEFAULT_BASE_URL;
use finsecure_core::prelude::*;
use finsecure_core::RiskScore;

use crate::auth::{CredentialVerifier, StaticCredentialVerifier};
use crate::config::Settings;
use crate::flows::{HealthFlow, HistoryFlow, MetricsFlow, RecommendationFlow, TestRunFlow};

/// Process lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Operator session; lives for the process lifetime only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Risk input and recommendation (and the login panel while signed out)
    #[default]
    Client,
    /// Operator-only tabs; requires an authenticated session
    OperatorDashboard,
}

/// Operator dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Tests,
    Users,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [DashboardTab::Tests, DashboardTab::Users];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Tests => "QA & Testing",
            DashboardTab::Users => "User Data",
        }
    }

    /// The other tab
    pub fn toggled(self) -> Self {
        match self {
            DashboardTab::Tests => DashboardTab::Users,
            DashboardTab::Users => DashboardTab::Tests,
        }
    }
}

/// Input field with keyboard focus in the client view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    ClientName,
    RiskScore,
    Username,
    Password,
}

impl FocusField {
    pub fn is_text(self) -> bool {
        !matches!(self, FocusField::RiskScore)
    }
}

/// Operator credentials as typed, held in memory until sign-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub username: String,
    pub password: String,
}

impl CredentialInput {
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

/// Flattened session/view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    Unauthenticated,
    AuthenticatedClient,
    AuthenticatedDashboard(DashboardTab),
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Settings from the config file
    pub settings: Settings,

    /// Resolved backend address, shown in the header and in diagnostics
    pub api_base_url: String,

    session: Session,
    view: ViewMode,
    tab: DashboardTab,

    // Client view inputs
    pub client_name: String,
    pub risk_score: RiskScore,
    pub credentials: CredentialInput,
    pub focus: FocusField,
    pub login_error: Option<String>,

    // Request flows
    pub recommendation: RecommendationFlow,
    pub test_run: TestRunFlow,
    pub metrics: MetricsFlow,
    pub history: HistoryFlow,
    pub health: HealthFlow,

    /// Animation frame for loading indicators
    pub spinner_frame: usize,

    verifier: Arc<dyn CredentialVerifier>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), DEFAULT_BASE_URL)
    }

    pub fn with_settings(settings: Settings, api_base_url: impl Into<String>) -> Self {
        let risk_score = settings.client.risk_score();
        Self {
            phase: AppPhase::Running,
            settings,
            api_base_url: api_base_url.into(),
            session: Session::default(),
            view: ViewMode::Client,
            tab: DashboardTab::Tests,
            client_name: String::new(),
            risk_score,
            credentials: CredentialInput::default(),
            focus: FocusField::ClientName,
            login_error: None,
            recommendation: RecommendationFlow::new(),
            test_run: TestRunFlow::new(),
            metrics: MetricsFlow::new(),
            history: HistoryFlow::new(),
            health: HealthFlow::new(),
            spinner_frame: 0,
            verifier: Arc::new(StaticCredentialVerifier::default()),
        }
    }

    /// Swap the credential check.
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn verifier(&self) -> &dyn CredentialVerifier {
        self.verifier.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session / view transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Check the typed credentials.
    ///
    /// On success the dashboard opens on the Tests tab and `true` is returned;
    /// the caller owns the entry side effects. On failure the session is
    /// untouched and `login_error` is set.
    pub fn authenticate(&mut self) -> bool {
        if self.session.authenticated {
            debug!("Authenticate ignored: already signed in");
            return false;
        }

        if self
            .verifier
            .verify(&self.credentials.username, &self.credentials.password)
        {
            info!("Operator '{}' signed in", self.credentials.username);
            self.session.authenticated = true;
            self.login_error = None;
            self.view = ViewMode::OperatorDashboard;
            self.tab = DashboardTab::Tests;
            true
        } else {
            warn!("Rejected sign-in for '{}'", self.credentials.username);
            self.login_error = Some(self.verifier.failure_message());
            false
        }
    }

    /// End the session from any state. Always lands on the client view.
    pub fn sign_out(&mut self) {
        if self.session.authenticated {
            info!("Operator signed out");
        }
        self.session.authenticated = false;
        self.view = ViewMode::Client;
        self.tab = DashboardTab::Tests;
        self.credentials.clear();
        self.login_error = None;
        self.focus = FocusField::ClientName;
    }

    /// Switch dashboard tab. Returns `true` only when the tab actually changed.
    pub fn select_tab(&mut self, tab: DashboardTab) -> bool {
        if self.view != ViewMode::OperatorDashboard || self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Leave the dashboard for the client view while staying signed in.
    pub fn show_client_view(&mut self) -> bool {
        if !self.session.authenticated || self.view == ViewMode::Client {
            return false;
        }
        self.view = ViewMode::Client;
        if !self.focus_order().contains(&self.focus) {
            self.focus = FocusField::ClientName;
        }
        true
    }

    /// Re-enter the dashboard. Returns `true` on an actual entry.
    pub fn show_dashboard(&mut self) -> bool {
        if !self.session.authenticated || self.view == ViewMode::OperatorDashboard {
            return false;
        }
        self.view = ViewMode::OperatorDashboard;
        true
    }

    pub fn orchestrator_state(&self) -> OrchestratorState {
        match (self.session.authenticated, self.view) {
            (false, _) => OrchestratorState::Unauthenticated,
            (true, ViewMode::Client) => OrchestratorState::AuthenticatedClient,
            (true, ViewMode::OperatorDashboard) => {
                OrchestratorState::AuthenticatedDashboard(self.tab)
            }
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Client view input
    // ─────────────────────────────────────────────────────────────────────────

    /// Focusable fields, in Tab order. The login fields only exist while
    /// signed out.
    pub fn focus_order(&self) -> &'static [FocusField] {
        if self.session.authenticated {
            &[FocusField::ClientName, FocusField::RiskScore]
        } else {
            &[
                FocusField::ClientName,
                FocusField::RiskScore,
                FocusField::Username,
                FocusField::Password,
            ]
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus_order(), self.focus, 1);
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        self.focus = step(order, self.focus, order.len() - 1);
    }

    /// Text buffer behind the focused field, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FocusField::ClientName => Some(&mut self.client_name),
            FocusField::Username => Some(&mut self.credentials.username),
            FocusField::Password => Some(&mut self.credentials.password),
            FocusField::RiskScore => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// True if any flow is waiting on the backend
    pub fn any_loading(&self) -> bool {
        self.recommendation.is_loading()
            || self.test_run.is_running()
            || self.metrics.is_loading()
            || self.history.is_loading()
            || self.health.is_checking()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

fn step(order: &[FocusField], current: FocusField, by: usize) -> FocusField {
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    order[(idx + by) % order.len()]
}
