//! HTTP implementation of the auth transport.
//!
//! Speaks the papertrade API's JSON contract: success bodies are
//! `{"user": {...}}` (or empty for void operations), error bodies carry at
//! least a string `error` field. Sessions ride on cookies, so the client is
//! built with a cookie store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    Config, EP_CURRENT_SESSION, EP_FORGOT_PASSWORD, EP_LOGIN, EP_LOGOUT, EP_REGISTER,
    EP_RESET_PASSWORD, MSG_LOGIN_FAILED, MSG_LOGOUT_FAILED, MSG_NETWORK_ERROR,
    MSG_REGISTRATION_FAILED, MSG_RESET_APPLY_FAILED, MSG_RESET_REQUEST_FAILED,
    MSG_SESSION_FETCH_FAILED,
};
use crate::domain::{LoginCredentials, Registration, User};
use crate::errors::{AuthError, AuthResult};
use crate::transport::AuthTransport;

/// Success envelope for user-bearing responses.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

/// Error body shape; `error` is the only field the client relies on.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordBody<'a> {
    token: &'a str,
    new_password: &'a str,
}

/// Production auth transport over HTTP/JSON.
pub struct HttpAuthTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthTransport {
    /// Build a transport for the configured API.
    pub fn new(config: &Config) -> AuthResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| AuthError::transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Parse a user-bearing response, mapping failures to display-ready
    /// errors.
    async fn expect_user(&self, response: Response, fallback: &str) -> AuthResult<User> {
        if !response.status().is_success() {
            return Err(read_failure(response, fallback).await);
        }
        let envelope: UserEnvelope = response.json().await.map_err(network_failure)?;
        Ok(envelope.user)
    }

    /// Check a void response for success.
    async fn expect_ok(&self, response: Response, fallback: &str) -> AuthResult<()> {
        if !response.status().is_success() {
            return Err(read_failure(response, fallback).await);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthTransport for HttpAuthTransport {
    async fn login(&self, credentials: LoginCredentials) -> AuthResult<User> {
        debug!(identifier = %credentials.email_or_username, "POST {}", EP_LOGIN);
        let response = self
            .client
            .post(self.url(EP_LOGIN))
            .json(&credentials)
            .send()
            .await
            .map_err(network_failure)?;
        self.expect_user(response, MSG_LOGIN_FAILED).await
    }

    async fn register(&self, payload: Registration) -> AuthResult<User> {
        debug!(email = %payload.email, "POST {}", EP_REGISTER);
        let response = self
            .client
            .post(self.url(EP_REGISTER))
            .json(&payload)
            .send()
            .await
            .map_err(network_failure)?;
        self.expect_user(response, MSG_REGISTRATION_FAILED).await
    }

    async fn fetch_current_session(&self) -> AuthResult<User> {
        debug!("GET {}", EP_CURRENT_SESSION);
        let response = self
            .client
            .get(self.url(EP_CURRENT_SESSION))
            .send()
            .await
            .map_err(network_failure)?;

        // No cookie or an expired one; an expected steady state
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::SessionAbsent);
        }
        self.expect_user(response, MSG_SESSION_FETCH_FAILED).await
    }

    async fn logout(&self) -> AuthResult<()> {
        debug!("POST {}", EP_LOGOUT);
        let response = self
            .client
            .post(self.url(EP_LOGOUT))
            .send()
            .await
            .map_err(network_failure)?;
        self.expect_ok(response, MSG_LOGOUT_FAILED).await
    }

    async fn request_password_reset(&self, email: String) -> AuthResult<()> {
        debug!("POST {}", EP_FORGOT_PASSWORD);
        let response = self
            .client
            .post(self.url(EP_FORGOT_PASSWORD))
            .json(&ForgotPasswordBody { email: &email })
            .send()
            .await
            .map_err(network_failure)?;
        self.expect_ok(response, MSG_RESET_REQUEST_FAILED).await
    }

    async fn apply_password_reset(
        &self,
        token: String,
        new_password: String,
    ) -> AuthResult<()> {
        debug!("POST {}", EP_RESET_PASSWORD);
        let response = self
            .client
            .post(self.url(EP_RESET_PASSWORD))
            .json(&ResetPasswordBody {
                token: &token,
                new_password: &new_password,
            })
            .send()
            .await
            .map_err(network_failure)?;
        self.expect_ok(response, MSG_RESET_APPLY_FAILED).await
    }
}

/// Map a connection, timeout, or decode failure to a generic transport error.
fn network_failure(err: reqwest::Error) -> AuthError {
    debug!("transport failure: {err}");
    AuthError::transport(MSG_NETWORK_ERROR)
}

/// Drain a non-success response and extract its error message.
async fn read_failure(response: Response, fallback: &str) -> AuthError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!(%status, "request rejected");
    rejection_from_body(&body, fallback)
}

/// Extract the server's message from an error body, else use the fallback.
fn rejection_from_body(body: &str, fallback: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message) }) if !message.is_empty() => {
            AuthError::rejected(message)
        }
        _ => AuthError::rejected(fallback),
    }
}
