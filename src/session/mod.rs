//! Session layer - state machine, published session value, and reset flow.
//!
//! The machine is crate-private; consumers interact through [`AuthContext`].

mod context;
mod machine;
pub mod reset;
mod state;

pub use context::AuthContext;
pub use reset::ResetFlow;
pub use state::{Session, SessionState, SessionStatus};
