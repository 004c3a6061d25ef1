//! Centralized error handling.
//!
//! Every fallible operation in the crate returns [`AuthResult`]. The error
//! messages are display-ready: the session machine stores them verbatim in
//! `Session.last_error` and UI layers render them as-is.

use thiserror::Error;

/// Authentication error taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server declined the operation with a specific reason
    /// (bad credentials, duplicate email, expired reset token, ...).
    /// Carries the server's message verbatim when one was provided.
    #[error("{0}")]
    Rejected(String),

    /// The network boundary failed: unreachable host, timeout, or a
    /// malformed response body.
    #[error("{0}")]
    Transport(String),

    /// No valid session exists server-side (missing or expired cookie).
    /// Never surfaced to the user; normalized to an anonymous session.
    #[error("No active session")]
    SessionAbsent,

    /// The reset-link token parameter is absent or blank. Detected locally,
    /// before any network call.
    #[error("Invalid or missing reset token")]
    InvalidResetLink,

    /// A payload failed local validation before reaching the transport.
    #[error("{0}")]
    Validation(String),

    /// An authenticated user was required but the session has none.
    /// Indicates a caller bug, not a runtime condition to retry.
    #[error("Session is not authenticated")]
    NotAuthenticated,
}

impl AuthError {
    /// Create a rejection error carrying a server-provided message.
    pub fn rejected(msg: impl Into<String>) -> Self {
        AuthError::Rejected(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        AuthError::Transport(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        AuthError::Validation(msg.into())
    }

    /// True when the failure means "no session", which the machine treats as
    /// an expected steady state rather than an error.
    pub fn is_session_absent(&self) -> bool {
        matches!(self, AuthError::SessionAbsent)
    }

    /// The display-ready message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias
pub type AuthResult<T> = Result<T, AuthError>;
