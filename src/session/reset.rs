//! Password reset flow.
//!
//! The reset token arrives as a URL parameter and stays opaque: the client
//! forwards it verbatim and never parses its structure. A missing token is
//! caught here, locally, before any network call. Neither reset operation
//! touches the published session.

use crate::errors::{AuthError, AuthResult};
use crate::transport::AuthTransport;

/// Ask the server to email a reset link to `email`.
pub async fn request_reset(transport: &dyn AuthTransport, email: &str) -> AuthResult<()> {
    transport.request_password_reset(email.to_string()).await
}

/// A reset attempt bound to the token from the reset link.
#[derive(Debug, Clone)]
pub struct ResetFlow {
    token: String,
}

impl ResetFlow {
    /// Build the flow from the URL's token parameter.
    ///
    /// An absent or blank token is an invalid link, reported immediately
    /// without any network call.
    pub fn from_token(token: Option<&str>) -> AuthResult<Self> {
        match token {
            Some(t) if !t.trim().is_empty() => Ok(Self {
                token: t.to_string(),
            }),
            _ => Err(AuthError::InvalidResetLink),
        }
    }

    /// The opaque token this flow will forward.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Apply the reset with the user's new password.
    pub async fn submit(
        &self,
        transport: &dyn AuthTransport,
        new_password: &str,
    ) -> AuthResult<()> {
        transport
            .apply_password_reset(self.token.clone(), new_password.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_invalid_link() {
        assert_eq!(
            ResetFlow::from_token(None).unwrap_err(),
            AuthError::InvalidResetLink
        );
    }

    #[test]
    fn test_blank_token_is_invalid_link() {
        assert_eq!(
            ResetFlow::from_token(Some("   ")).unwrap_err(),
            AuthError::InvalidResetLink
        );
    }

    #[test]
    fn test_token_kept_verbatim() {
        let flow = ResetFlow::from_token(Some("v1.abc-DEF_123==")).unwrap();
        assert_eq!(flow.token(), "v1.abc-DEF_123==");
    }
}
