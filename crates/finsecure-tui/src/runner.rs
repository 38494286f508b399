//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use finsecure_api::ApiClient;
use finsecure_app::{process_message, signals, AppState, Message};
use finsecure_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
pub async fn run<C>(mut state: AppState, client: Arc<C>) -> Result<()>
where
    C: ApiClient + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("Backend: {}", state.api_base_url);

    let mut term = ratatui::init();

    // Unified message channel: request completions, deferred refreshes, signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, client);

    ratatui::restore();

    result
}

fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<C>,
) -> Result<()>
where
    C: ApiClient + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &client);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &client);
        }
    }

    info!("Shutting down");
    Ok(())
}
