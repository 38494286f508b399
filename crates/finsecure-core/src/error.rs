//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    /// The backend could not be reached at all.
    #[error("Failed to connect to server at {base_url}. Is the backend running?")]
    Transport { base_url: String, reason: String },

    /// The backend answered but signalled a logical failure.
    #[error("Server at {base_url} rejected the request: {message}")]
    Backend { base_url: String, message: String },

    /// The backend answered with a body we could not interpret.
    #[error("Unexpected response from server at {base_url}: {reason}")]
    InvalidResponse { base_url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(base_url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            base_url: base_url.into(),
            reason: reason.into(),
        }
    }

    pub fn backend(base_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            base_url: base_url.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(base_url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            base_url: base_url.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when the backend never produced a usable answer (unreachable or garbled).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::InvalidResponse { .. })
    }

    /// The short cause of a transport failure, without the address banner.
    ///
    /// Falls back to the full display string for every other variant.
    pub fn reason(&self) -> String {
        match self {
            Error::Transport { reason, .. } | Error::InvalidResponse { reason, .. } => {
                reason.clone()
            }
            Error::Backend { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::Backend { .. }
                | Error::InvalidResponse { .. }
                | Error::Config { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
