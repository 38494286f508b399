//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every request runs inside its own tokio task and reports back with exactly
//! one completion message, including when the request future panics, so no
//! flow can be left with its loading flag stuck.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use finsecure_api::ApiClient;
use finsecure_core::prelude::*;

use crate::flows::{health, history, metrics, recommendation, test_run, RunId};
use crate::handler::Task;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: ApiClient + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, client).await;
            });
        }

        UpdateAction::ScheduleMetricsRefresh { run_id, delay } => {
            spawn_deferred_metrics_refresh(run_id, delay, msg_tx);
        }
    }
}

/// Run one request task and send its completion message.
pub async fn execute_task<C>(task: Task, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: ApiClient + Sync + 'static,
{
    let base_url = client.base_url().to_string();

    let message = match task {
        Task::Recommend { seq, request } => {
            let c = client.clone();
            let result = guarded(&base_url, async move { c.request_recommendation(request).await })
                .await;
            Message::RecommendationResolved {
                seq,
                outcome: recommendation::outcome_from(result),
            }
        }

        Task::RunTests { run_id, suite } => {
            let c = client.clone();
            let result = guarded(&base_url, async move { c.run_test_suite(suite).await }).await;
            Message::TestRunResolved {
                run_id,
                outcome: test_run::outcome_from(result, &base_url),
            }
        }

        Task::FetchMetrics => {
            let c = client.clone();
            let result = guarded(&base_url, async move { c.fetch_metrics().await }).await;
            Message::MetricsResolved(metrics::resolve(result))
        }

        Task::FetchHistory => {
            let c = client.clone();
            let result = guarded(&base_url, async move { c.fetch_history().await }).await;
            Message::HistoryResolved(history::resolve(result))
        }

        Task::CheckHealth => {
            let c = client.clone();
            let result = guarded(&base_url, async move { c.check_health().await }).await;
            Message::HealthResolved(health::resolve(result))
        }
    };

    if msg_tx.send(message).await.is_err() {
        debug!("Completion dropped: event loop has shut down");
    }
}

/// Run `request` on its own task; a panic becomes a transport-class error.
async fn guarded<T, F>(base_url: &str, request: F) -> Result<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    match tokio::spawn(request).await {
        Ok(result) => result,
        Err(e) => {
            error!("Request task aborted: {}", e);
            Err(Error::transport(base_url, format!("request aborted: {}", e)))
        }
    }
}

/// Send `Message::RefreshMetrics` once, `delay` from now.
pub fn spawn_deferred_metrics_refresh(
    run_id: RunId,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!("Refreshing metrics after test run #{}", run_id);
        let _ = msg_tx.send(Message::RefreshMetrics).await;
    })
}
