//! Registration payload and its local validation.
//!
//! Field rules mirror the sign-up form; the password rule delegates to
//! [`crate::domain::password`] so the policy is encoded exactly once.

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::password;
use crate::errors::{AuthError, AuthResult};

/// Registration data transfer object.
#[derive(Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// User display name
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Email address
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Plain-text password, must satisfy every policy rule
    #[validate(custom(function = "strong_password"))]
    pub password: String,
    /// Optional public handle
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Optional referral code, forwarded verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

// Don't expose the password in debug output (security)
impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("username", &self.username)
            .field("referral_code", &self.referral_code)
            .finish()
    }
}

impl Registration {
    /// Create a payload with only the required fields.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            username: None,
            referral_code: None,
        }
    }

    /// Set the optional username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the optional referral code.
    pub fn referral_code(mut self, code: impl Into<String>) -> Self {
        self.referral_code = Some(code.into());
        self
    }

    /// Validate the payload, returning it unchanged on success.
    pub fn validated(self) -> AuthResult<Self> {
        self.validate()
            .map_err(|e| AuthError::validation(format_validation_errors(&e)))?;
        Ok(self)
    }
}

fn strong_password(password: &str) -> Result<(), ValidationError> {
    if password::satisfies_all(password) {
        return Ok(());
    }
    let mut error = ValidationError::new("password_strength");
    error.message = Some("Password does not meet all requirements".into());
    Err(error)
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
