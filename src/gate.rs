//! Login and password-change orchestration.
//!
//! `AuthGate` wires the leaf components together in the order the login form
//! needs them: rate limit first, digest verification second, token minting
//! and limiter reset only on success. Outcomes are data; all user-facing
//! wording stays with the caller, as does persistence of the digest and the
//! minted token.

use log::{info, warn};

use crate::password::{
    generate_password, validate_password, PasswordHasher, DEFAULT_PASSWORD_LENGTH,
};
use crate::rate_limit::LoginRateLimiter;
use crate::session::{SessionStatus, SessionTokenManager};
use crate::types::{AuthError, SecurityConfig};

/// Result of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The attempt was not allowed to run; the window reopens at `reset_at_ms`.
    RateLimited { reset_at_ms: i64 },
    /// The password did not match the stored digest.
    InvalidPassword { remaining_attempts: u32 },
    /// The password matched; `token` is the freshly minted session.
    Success { token: String },
}

#[derive(Debug)]
pub struct AuthGate {
    hasher: PasswordHasher,
    tokens: SessionTokenManager,
    limiter: LoginRateLimiter,
}

impl AuthGate {
    pub fn new(config: &SecurityConfig) -> Result<Self, AuthError> {
        Ok(Self {
            hasher: PasswordHasher::from_config(config)?,
            tokens: SessionTokenManager::new(&config.token_secret, config.session_lifetime),
            limiter: LoginRateLimiter::new(config.max_attempts, config.attempt_window),
        })
    }

    /// Run one login attempt for the client identified by `client_id`.
    ///
    /// On success the limiter record for `client_id` is cleared and a fresh
    /// session token for `identity` is returned.
    pub fn login(
        &self,
        client_id: &str,
        identity: &str,
        password: &str,
        stored_digest: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let decision = self.limiter.check(client_id);
        if !decision.allowed {
            return Ok(LoginOutcome::RateLimited {
                // Blocked decisions always carry the reopen time.
                reset_at_ms: decision.reset_at_ms.unwrap_or_default(),
            });
        }

        if !self.hasher.verify(password, stored_digest) {
            warn!("failed login attempt for client {client_id}");
            return Ok(LoginOutcome::InvalidPassword {
                remaining_attempts: decision.remaining_attempts,
            });
        }

        self.limiter.reset(client_id);
        let token = self.tokens.create_session(identity)?;
        info!("session issued for {identity}");

        Ok(LoginOutcome::Success { token })
    }

    /// Gate a new password on the strength rules and return its digest for
    /// the caller to persist.
    pub fn accept_new_password(&self, candidate: &str) -> Result<String, AuthError> {
        let report = validate_password(candidate);
        if !report.is_valid {
            return Err(AuthError::WeakPassword(report.issues));
        }

        Ok(self.hasher.hash(candidate))
    }

    /// Propose a generated password that passes the strength rules.
    pub fn suggest_password(&self) -> String {
        generate_password(DEFAULT_PASSWORD_LENGTH)
    }

    /// Check a stored session token. Used on every protected-route check.
    pub fn check_session(&self, token: &str) -> SessionStatus {
        self.tokens.validate_session(token)
    }
}
