//! Handler module - TEA update function and key handling
//!
//! - `update`: main `update()` function and message dispatch
//! - `keys`: key events to messages, per view

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use finsecure_core::{RecommendationRequest, TestSuite};

use crate::flows::{RequestSeq, RunId};
use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn a background request task
    SpawnTask(Task),

    /// Fire `Message::RefreshMetrics` once after `delay`.
    ///
    /// Emitted exactly once per accepted test run completion.
    ScheduleMetricsRefresh { run_id: RunId, delay: Duration },
}

/// Background request tasks; each completes with exactly one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Recommend {
        seq: RequestSeq,
        request: RecommendationRequest,
    },
    RunTests {
        run_id: RunId,
        suite: TestSuite,
    },
    FetchMetrics,
    FetchHistory,
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
