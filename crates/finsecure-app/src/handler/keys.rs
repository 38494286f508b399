//! Key event handlers for each view

use finsecure_core::TestSuite;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DashboardTab, FocusField, ViewMode};

/// Small and large risk-score steps
const RISK_STEP: i64 = 1;
const RISK_PAGE: i64 = 10;

/// Convert key events to messages based on the current view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.view() {
        ViewMode::Client => handle_key_client(state, key),
        ViewMode::OperatorDashboard => handle_key_dashboard(state, key),
    }
}

/// Handle key events in the client view
fn handle_key_client(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Signed-in operators step back to the dashboard instead of quitting
        InputKey::Esc if state.is_authenticated() => Some(Message::ShowDashboard),
        InputKey::Esc => Some(Message::Quit),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::F(5) => Some(Message::CheckHealth),

        _ => match state.focus {
            FocusField::RiskScore => handle_key_risk_slider(key),
            FocusField::Username if key == InputKey::Enter => Some(Message::FocusNext),
            FocusField::Password if key == InputKey::Enter => Some(Message::Authenticate {
                username: state.credentials.username.clone(),
                password: state.credentials.password.clone(),
            }),
            _ => handle_key_text_field(key),
        },
    }
}

/// Slider focused: arrows and paging move the score
fn handle_key_risk_slider(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Down => Some(Message::AdjustRiskScore(-RISK_STEP)),
        InputKey::Right | InputKey::Up => Some(Message::AdjustRiskScore(RISK_STEP)),
        InputKey::PageDown => Some(Message::AdjustRiskScore(-RISK_PAGE)),
        InputKey::PageUp => Some(Message::AdjustRiskScore(RISK_PAGE)),
        InputKey::Home => Some(Message::AdjustRiskScore(-100)),
        InputKey::End => Some(Message::AdjustRiskScore(100)),
        InputKey::Enter => Some(Message::SubmitRecommendation),
        _ => None,
    }
}

fn handle_key_text_field(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitRecommendation),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Up => Some(Message::FocusPrevious),
        InputKey::Down => Some(Message::FocusNext),
        other => other.text_char().map(Message::InputChar),
    }
}

/// Handle key events in the operator dashboard
fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    let tab = state.tab();

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('1') => Some(Message::SelectTab(DashboardTab::Tests)),
        InputKey::Char('2') => Some(Message::SelectTab(DashboardTab::Users)),
        InputKey::Tab | InputKey::BackTab => Some(Message::SelectTab(tab.toggled())),

        // Suite launchers live on the Tests tab and are disabled while a run is out
        InputKey::Char('c') if tab == DashboardTab::Tests && !state.test_run.is_running() => {
            Some(Message::RunTestSuite(TestSuite::Compliance))
        }
        InputKey::Char('s') if tab == DashboardTab::Tests && !state.test_run.is_running() => {
            Some(Message::RunTestSuite(TestSuite::Security))
        }

        InputKey::Char('r') => match tab {
            DashboardTab::Tests => Some(Message::RefreshMetrics),
            DashboardTab::Users => Some(Message::RefreshHistory),
        },

        InputKey::Char('v') => Some(Message::ShowClientView),
        InputKey::Char('o') => Some(Message::SignOut),
        InputKey::F(5) => Some(Message::CheckHealth),

        _ => None,
    }
}
