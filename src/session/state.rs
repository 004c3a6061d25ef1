//! Session value and its derived state view.

use crate::domain::User;
use crate::errors::{AuthError, AuthResult};

/// Coarse activity status of the session machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Bootstrap has not run yet; nothing is known about the visitor.
    Uninitialized,
    /// No transition is in flight and the last one did not fail.
    Idle,
    /// A transition is in flight.
    Loading,
    /// The last transition failed; `last_error` holds the message.
    Error,
}

/// The client's current belief about whether a user is authenticated.
///
/// Exactly one lives per running client process: written only by the session
/// machine, read by any number of consumers through the publisher.
///
/// Invariants: `user` is present only when the most recent resolution was a
/// success; `status` cannot be Loading and Error at once (single field);
/// `last_error` is cleared at the start of every new transition attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub status: SessionStatus,
    pub last_error: Option<String>,
}

/// The five-state view UI code matches on.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Authenticated(User),
    Anonymous,
    Error(String),
}

impl Session {
    /// The session before bootstrap has run.
    pub fn uninitialized() -> Self {
        Self {
            user: None,
            status: SessionStatus::Uninitialized,
            last_error: None,
        }
    }

    /// True when a user is attached and no transition is in flight or failed.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.status == SessionStatus::Idle
    }

    /// True while a transition is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    /// The authenticated user, or a loud error when there is none.
    ///
    /// Calling this on an anonymous or uninitialized session is a caller
    /// bug, not a condition to retry.
    pub fn authenticated_user(&self) -> AuthResult<&User> {
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    /// Derive the state view from the raw fields.
    pub fn state(&self) -> SessionState {
        match self.status {
            SessionStatus::Uninitialized => SessionState::Uninitialized,
            SessionStatus::Loading => SessionState::Loading,
            SessionStatus::Error => {
                SessionState::Error(self.last_error.clone().unwrap_or_default())
            }
            SessionStatus::Idle => match &self.user {
                Some(user) => SessionState::Authenticated(user.clone()),
                None => SessionState::Anonymous,
            },
        }
    }
}
