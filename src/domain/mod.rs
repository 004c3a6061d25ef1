//! Domain layer - entities, credential payloads, and the password policy.
//!
//! Pure types with no network or runtime dependencies.

pub mod password;
mod register;
mod user;

pub use register::Registration;
pub use user::{LoginCredentials, User};
