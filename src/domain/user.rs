//! User entity and login credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated user as returned by the server.
///
/// Immutable once received: the session machine replaces it wholesale on
/// every successful fetch or login, never patches fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Login credentials data transfer object.
///
/// Transient: owned by the caller until handed to the transport, never
/// persisted by the core.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    /// Email address or username, the server accepts either
    pub email_or_username: String,
    /// Plain-text password
    pub password: String,
    /// Request a long-lived session cookie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

// Don't expose the password in debug output (security)
impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email_or_username", &self.email_or_username)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl LoginCredentials {
    /// Create login credentials without the remember-me flag.
    pub fn new(email_or_username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_or_username: email_or_username.into(),
            password: password.into(),
            remember_me: None,
        }
    }

    /// Set the remember-me flag.
    pub fn remember_me(mut self, remember: bool) -> Self {
        self.remember_me = Some(remember);
        self
    }
}
