//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Number of independent password rules
pub const PASSWORD_RULE_COUNT: usize = 5;

// =============================================================================
// Registration
// =============================================================================

/// Minimum full-name length requirement
pub const MIN_FULL_NAME_LENGTH: u64 = 1;

/// Minimum username length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: u64 = 20;

// =============================================================================
// API Endpoints (relative to the configured base URL)
// =============================================================================

/// Login endpoint
pub const EP_LOGIN: &str = "/auth/login";

/// Registration endpoint
pub const EP_REGISTER: &str = "/auth/register";

/// Current-session endpoint
pub const EP_CURRENT_SESSION: &str = "/auth/me";

/// Logout endpoint
pub const EP_LOGOUT: &str = "/auth/logout";

/// Password-reset request endpoint
pub const EP_FORGOT_PASSWORD: &str = "/auth/forgot-password";

/// Password-reset apply endpoint
pub const EP_RESET_PASSWORD: &str = "/auth/reset-password";

// =============================================================================
// Fallback Error Messages
// =============================================================================
// Used when the server's error body carries no message of its own.

/// Fallback message for a declined login
pub const MSG_LOGIN_FAILED: &str = "Login failed";

/// Fallback message for a declined registration
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed";

/// Fallback message for a failed current-session fetch
pub const MSG_SESSION_FETCH_FAILED: &str = "Failed to load session";

/// Fallback message for a failed remote logout
pub const MSG_LOGOUT_FAILED: &str = "Logout failed";

/// Fallback message for a failed reset request
pub const MSG_RESET_REQUEST_FAILED: &str = "Failed to send reset email";

/// Fallback message for a failed reset apply
pub const MSG_RESET_APPLY_FAILED: &str = "Failed to reset password";

/// Generic message for network-level failures
pub const MSG_NETWORK_ERROR: &str = "Network error, please try again";

// =============================================================================
// Client Configuration
// =============================================================================

/// Default API base URL (for development)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
