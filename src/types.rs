//! Shared types for authgate
//!
//! Contains the crate error enum and the security configuration model.
//!
//! The error taxonomy is deliberately narrow: `AuthError` covers genuine
//! failures (bad configuration, token minting, a weak password rejected at
//! persist time). Expected outcomes of an authentication attempt — wrong
//! password, expired session, exhausted attempts — are plain fields on the
//! operation's return value and never surface as errors.

use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Password does not meet strength requirements: {}", .0.join(", "))]
    WeakPassword(Vec<String>),
}

/// Security configuration, supplied at construction time.
///
/// The salt and token secret are injected rather than baked into the crate so
/// they can be rotated and kept out of source control.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Salt for the password digest. Fixed per deployment; changing it
    /// invalidates every stored digest.
    pub hash_salt: String,
    /// PBKDF2 iteration count.
    pub hash_iterations: u32,
    /// HMAC secret for session tokens.
    pub token_secret: String,
    /// How long a minted session stays valid.
    pub session_lifetime: Duration,
    /// Login attempts allowed per rate-limit window.
    pub max_attempts: u32,
    /// Rate-limit window duration.
    pub attempt_window: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            hash_salt: "change_me_in_production".to_string(),
            hash_iterations: 10_000,
            token_secret: "change_me_in_production".to_string(),
            session_lifetime: Duration::hours(24),
            max_attempts: 5,
            attempt_window: Duration::minutes(15),
        }
    }
}
