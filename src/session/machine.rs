//! Session state machine - the single writer of session state.
//!
//! Every transition follows the same shape: mark the attempt, call the
//! transport, resolve to a new published session. Failures never leave the
//! machine in a dead state; every path resolves to Idle or Error and the
//! next transition is always permitted.
//!
//! The machine provides no mutual exclusion between different transitions:
//! callers disable the triggering control while the session is Loading, and
//! if two transitions do interleave, the last response to arrive wins.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{LoginCredentials, Registration, User};
use crate::errors::AuthResult;
use crate::session::state::{Session, SessionStatus};
use crate::transport::AuthTransport;

pub(crate) struct SessionMachine {
    transport: Arc<dyn AuthTransport>,
    tx: watch::Sender<Session>,
}

impl SessionMachine {
    /// Create the machine and the receiver side of its session channel.
    pub(crate) fn new(transport: Arc<dyn AuthTransport>) -> (Self, watch::Receiver<Session>) {
        let (tx, rx) = watch::channel(Session::uninitialized());
        (Self { transport, tx }, rx)
    }

    /// Mark a new transition attempt: Loading, prior error cleared.
    fn begin_attempt(&self) {
        self.tx.send_modify(|session| {
            session.status = SessionStatus::Loading;
            session.last_error = None;
        });
    }

    /// Resolve the in-flight transition to an authenticated session.
    fn resolve_user(&self, user: User) {
        self.tx.send_modify(|session| {
            session.user = Some(user);
            session.status = SessionStatus::Idle;
            session.last_error = None;
        });
    }

    /// Resolve the in-flight transition to an anonymous session.
    fn resolve_anonymous(&self) {
        self.tx.send_modify(|session| {
            session.user = None;
            session.status = SessionStatus::Idle;
            session.last_error = None;
        });
    }

    /// Resolve the in-flight transition to an error; the user is left
    /// exactly as it was before the attempt.
    fn resolve_error(&self, message: String) {
        self.tx.send_modify(|session| {
            session.status = SessionStatus::Error;
            session.last_error = Some(message);
        });
    }

    /// Fetch the current server-side session and normalize any failure to
    /// an anonymous session. Shared by Bootstrap and Refresh: absence of a
    /// session is an expected steady state, never a user-visible error.
    pub(crate) async fn fetch_session(&self) {
        self.begin_attempt();
        match self.transport.fetch_current_session().await {
            Ok(user) => {
                debug!(user_id = %user.id, "session established");
                self.resolve_user(user);
            }
            Err(err) if err.is_session_absent() => {
                debug!("no server-side session");
                self.resolve_anonymous();
            }
            Err(err) => {
                // Reachability problems also normalize to Anonymous; the
                // cause stays observable here for callers that want to retry
                warn!("session fetch failed: {err}");
                self.resolve_anonymous();
            }
        }
    }

    /// Login transition. On success the published session becomes
    /// authenticated and the user is returned; on failure the session enters
    /// Error and the failure is also returned so the caller's UI can react.
    pub(crate) async fn login(&self, credentials: LoginCredentials) -> AuthResult<User> {
        self.begin_attempt();
        match self.transport.login(credentials).await {
            Ok(user) => {
                debug!(user_id = %user.id, "login succeeded");
                self.resolve_user(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.resolve_error(err.message());
                Err(err)
            }
        }
    }

    /// Register transition; same shape as login.
    pub(crate) async fn register(&self, payload: Registration) -> AuthResult<User> {
        self.begin_attempt();
        match self.transport.register(payload).await {
            Ok(user) => {
                debug!(user_id = %user.id, "registration succeeded");
                self.resolve_user(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.resolve_error(err.message());
                Err(err)
            }
        }
    }

    /// Logout transition. The local session becomes anonymous regardless of
    /// the remote outcome; local sign-out must never depend on server
    /// reachability.
    pub(crate) async fn logout(&self) {
        if let Err(err) = self.transport.logout().await {
            warn!("remote logout failed, clearing local session anyway: {err}");
        }
        self.resolve_anonymous();
    }

    /// ClearError transition: drop the error and fall back to whatever state
    /// the current user implies. No-op unless the session is in Error.
    pub(crate) fn clear_error(&self) {
        self.tx.send_if_modified(|session| {
            if session.status != SessionStatus::Error {
                return false;
            }
            session.status = SessionStatus::Idle;
            session.last_error = None;
            true
        });
    }
}
