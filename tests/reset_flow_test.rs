//! Password reset flow integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use papertrade_auth_client::errors::{AuthError, AuthResult};
use papertrade_auth_client::session::reset::{request_reset, ResetFlow};
use papertrade_auth_client::{AuthTransport, LoginCredentials, Registration, User};

/// Initialize tracing for test runs; honors RUST_LOG, no-op after the first
/// call.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Records reset calls so tests can assert what reached the network boundary.
#[derive(Default)]
struct RecordingTransport {
    reset_requests: Mutex<Vec<String>>,
    applied: Mutex<Vec<(String, String)>>,
    apply_calls: AtomicUsize,
}

#[async_trait]
impl AuthTransport for RecordingTransport {
    async fn login(&self, _credentials: LoginCredentials) -> AuthResult<User> {
        Err(AuthError::SessionAbsent)
    }

    async fn register(&self, _payload: Registration) -> AuthResult<User> {
        Err(AuthError::SessionAbsent)
    }

    async fn fetch_current_session(&self) -> AuthResult<User> {
        Err(AuthError::SessionAbsent)
    }

    async fn logout(&self) -> AuthResult<()> {
        Ok(())
    }

    async fn request_password_reset(&self, email: String) -> AuthResult<()> {
        self.reset_requests.lock().unwrap().push(email);
        Ok(())
    }

    async fn apply_password_reset(&self, token: String, new_password: String) -> AuthResult<()> {
        self.apply_calls.fetch_add(1, Ordering::SeqCst);
        self.applied.lock().unwrap().push((token, new_password));
        Ok(())
    }
}

#[tokio::test]
async fn test_missing_token_never_reaches_the_transport() {
    init_tracing();
    let transport = RecordingTransport::default();

    let err = ResetFlow::from_token(None).unwrap_err();
    assert_eq!(err, AuthError::InvalidResetLink);
    assert_eq!(transport.apply_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_token_forwarded_verbatim() {
    init_tracing();
    let transport = RecordingTransport::default();
    let flow = ResetFlow::from_token(Some("v1.opaque-TOKEN_value==")).unwrap();

    flow.submit(&transport, "Abcdefghij1!").await.unwrap();

    let applied = transport.applied.lock().unwrap();
    assert_eq!(
        applied.as_slice(),
        &[(
            "v1.opaque-TOKEN_value==".to_string(),
            "Abcdefghij1!".to_string()
        )]
    );
}

#[tokio::test]
async fn test_request_reset_passes_email_through() {
    init_tracing();
    let transport = RecordingTransport::default();

    request_reset(&transport, "trader@example.com").await.unwrap();

    assert_eq!(
        transport.reset_requests.lock().unwrap().as_slice(),
        &["trader@example.com".to_string()]
    );
}
