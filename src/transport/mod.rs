//! Auth transport layer - the network boundary.
//!
//! The session machine depends on this trait, never on a concrete client,
//! so tests substitute mocks and the production build wires in
//! [`HttpAuthTransport`].

mod http;

pub use http::HttpAuthTransport;

use async_trait::async_trait;

use crate::domain::{LoginCredentials, Registration, User};
use crate::errors::AuthResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contract for the six credential-bearing network operations.
///
/// Every operation is idempotent-safe to retry by the caller; the session
/// machine itself never retries. Every failure carries a human-readable
/// message, extracted from the server's error payload when present.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// Authenticate with an email-or-username and password.
    async fn login(&self, credentials: LoginCredentials) -> AuthResult<User>;

    /// Create a new account.
    async fn register(&self, payload: Registration) -> AuthResult<User>;

    /// Fetch the user attached to the current session cookie.
    ///
    /// Fails with `AuthError::SessionAbsent` when no valid session exists
    /// server-side.
    async fn fetch_current_session(&self) -> AuthResult<User>;

    /// End the session server-side. Best-effort: a failure here must not
    /// block local state cleanup.
    async fn logout(&self) -> AuthResult<()>;

    /// Ask the server to email a password-reset link.
    async fn request_password_reset(&self, email: String) -> AuthResult<()>;

    /// Apply a password reset authorized by an opaque token.
    async fn apply_password_reset(&self, token: String, new_password: String)
        -> AuthResult<()>;
}
