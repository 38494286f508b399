//! Operator credential checks
//!
//! The orchestrator only talks to [`CredentialVerifier`]. The shipped
//! [`StaticCredentialVerifier`] compares against one fixed pair and is a demo
//! placeholder, not an authentication mechanism: the backend performs no
//! per-request authorization, so anything this gate hides is still reachable
//! by direct HTTP calls.

use std::fmt;

/// Decides whether a username/password pair unlocks the operator dashboard
pub trait CredentialVerifier: fmt::Debug + Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Message shown after a rejected attempt
    fn failure_message(&self) -> String {
        "Invalid credentials.".to_string()
    }

    /// Credentials the login panel may advertise in debug builds of the demo
    fn debug_credentials(&self) -> Option<(&str, &str)> {
        None
    }
}

/// Compares against a single hardcoded pair
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub const DEFAULT_USERNAME: &'static str = "qa_admin";
    pub const DEFAULT_PASSWORD: &'static str = "test123";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USERNAME, Self::DEFAULT_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }

    fn failure_message(&self) -> String {
        format!(
            "Invalid credentials. Try: {} / {}",
            self.username, self.password
        )
    }

    fn debug_credentials(&self) -> Option<(&str, &str)> {
        Some((&self.username, &self.password))
    }
}
