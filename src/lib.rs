//! papertrade-auth-client - Client-side authentication for the papertrade
//! trading-simulation app.
//!
//! The crate owns the session/authentication state machine: it tracks
//! whether the visitor is authenticated, mediates every credential-bearing
//! network operation, and publishes auth state to the rest of the
//! application through a watch channel.
//!
//! # Layers
//!
//! - **config**: environment-driven settings and shared constants
//! - **domain**: the `User` entity, credential payloads, password policy
//! - **transport**: the network contract and its HTTP implementation
//! - **session**: the state machine, the published `Session`, reset flow
//! - **errors**: centralized error handling
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use papertrade_auth_client::{AuthContext, Config, HttpAuthTransport, LoginCredentials};
//!
//! # async fn run() -> papertrade_auth_client::AuthResult<()> {
//! let config = Config::from_env();
//! let transport = Arc::new(HttpAuthTransport::new(&config)?);
//! let auth = AuthContext::start(transport).await;
//!
//! let user = auth
//!     .login(LoginCredentials::new("trader@example.com", "Abcdefghij1!"))
//!     .await?;
//! println!("signed in as {}", user.email);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod session;
pub mod transport;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{password, LoginCredentials, Registration, User};
pub use errors::{AuthError, AuthResult};
pub use session::{AuthContext, ResetFlow, Session, SessionState, SessionStatus};
pub use transport::{AuthTransport, HttpAuthTransport};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockAuthTransport;
