//! finsecure-app - Session orchestration for the FinSecure console
//!
//! Implements the Elm-style update loop: [`AppState`] is the model,
//! [`Message`] the events, [`handler::update`] the transition function, and
//! [`actions`] the layer that turns [`UpdateAction`]s into tokio tasks talking
//! to the backend through [`finsecure_api::ApiClient`].

pub mod actions;
pub mod auth;
pub mod config;
pub mod flows;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use auth::{CredentialVerifier, StaticCredentialVerifier};
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, DashboardTab, FocusField, OrchestratorState, ViewMode};
