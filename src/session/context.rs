//! Session publisher - the process-wide subscription point.
//!
//! An explicit context object replaces hidden global state: it is
//! constructed exactly once at application start, triggers Bootstrap as part
//! of that construction, and is cloned (cheaply, `Arc` inside) into every
//! consumer. There is no way to obtain a context whose bootstrap was never
//! triggered, which enforces the must-initialize-before-use contract by
//! construction.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{LoginCredentials, Registration, User};
use crate::errors::AuthResult;
use crate::session::machine::SessionMachine;
use crate::session::state::{Session, SessionState};
use crate::transport::AuthTransport;

/// Handle to the process-wide session: a live view plus the action entry
/// points. Clones share the same underlying session.
#[derive(Clone)]
pub struct AuthContext {
    machine: Arc<SessionMachine>,
    rx: watch::Receiver<Session>,
}

impl AuthContext {
    /// Construct the context and run Bootstrap to completion.
    ///
    /// When this returns, the session is `Authenticated` or `Anonymous`;
    /// bootstrap failure is normalized to `Anonymous`, never surfaced as an
    /// error.
    pub async fn start(transport: Arc<dyn AuthTransport>) -> Self {
        let (machine, rx) = SessionMachine::new(transport);
        let machine = Arc::new(machine);
        machine.fetch_session().await;
        Self { machine, rx }
    }

    /// Construct the context with Bootstrap running in the background.
    ///
    /// Returns immediately so consumers can render the `Loading` phase;
    /// subscribers observe the transition out of it when the fetch resolves.
    /// Must be called from within a tokio runtime.
    pub fn start_background(transport: Arc<dyn AuthTransport>) -> Self {
        let (machine, rx) = SessionMachine::new(transport);
        let machine = Arc::new(machine);
        let bootstrapper = machine.clone();
        tokio::spawn(async move {
            bootstrapper.fetch_session().await;
        });
        Self { machine, rx }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.rx.borrow().clone()
    }

    /// Convenience view of the current state.
    pub fn state(&self) -> SessionState {
        self.rx.borrow().state()
    }

    /// Live view: re-delivered on every state change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.rx.clone()
    }

    /// Login with the given credentials. See the machine for the transition
    /// semantics; the caller owns any follow-on navigation.
    pub async fn login(&self, credentials: LoginCredentials) -> AuthResult<User> {
        self.machine.login(credentials).await
    }

    /// Register a new account.
    pub async fn register(&self, payload: Registration) -> AuthResult<User> {
        self.machine.register(payload).await
    }

    /// Sign out. Always succeeds locally, whatever the server says.
    pub async fn logout(&self) {
        self.machine.logout().await;
    }

    /// Re-fetch the server-side session; failure means the session expired
    /// and the published state becomes `Anonymous`.
    pub async fn refresh(&self) {
        self.machine.fetch_session().await;
    }

    /// Dismiss a published error, returning to the state the current user
    /// implies.
    pub fn clear_error(&self) {
        self.machine.clear_error();
    }
}
