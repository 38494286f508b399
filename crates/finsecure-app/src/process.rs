//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use finsecure_api::ApiClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up it produces, dispatching actions as
/// they appear.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) where
    C: ApiClient + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DashboardTab, OrchestratorState};
    use finsecure_api::test_utils::ScriptedApiClient;

    #[tokio::test]
    async fn test_login_runs_entry_fetch_end_to_end() {
        let (tx, mut rx) = mpsc::channel(8);
        let client = Arc::new(ScriptedApiClient::new());
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::Authenticate {
                username: "qa_admin".into(),
                password: "test123".into(),
            },
            &tx,
            &client,
        );
        assert!(state.metrics.is_loading());

        let completion = rx.recv().await.unwrap();
        process_message(&mut state, completion, &tx, &client);

        assert!(!state.metrics.is_loading());
        assert_eq!(client.calls().metrics, 1);
        assert_eq!(
            state.orchestrator_state(),
            OrchestratorState::AuthenticatedDashboard(DashboardTab::Tests)
        );
    }
}
