//! Session token management
//!
//! Tokens are HS256-signed claims carrying an identity and a fixed expiry
//! window (24 hours by default). Validation is total: malformed, foreign,
//! tampered, or expired tokens all map to an invalid status, never an error.
//!
//! There is no sliding expiration and no refresh: a session runs from issue
//! to expiry, and logout simply discards the caller's copy of the token.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::types::AuthError;

/// Claims carried by a session token. Timestamps are unix milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Outcome of a token check. `identity` is present only when the token is
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub is_valid: bool,
    pub identity: Option<String>,
}

impl SessionStatus {
    fn invalid() -> Self {
        Self {
            is_valid: false,
            identity: None,
        }
    }
}

pub struct SessionTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_ms: i64,
}

// Custom Debug implementation to hide the signing keys
impl std::fmt::Debug for SessionTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenManager")
            .field("encoding_key", &"<hidden>")
            .field("decoding_key", &"<hidden>")
            .field("lifetime_ms", &self.lifetime_ms)
            .finish()
    }
}

impl SessionTokenManager {
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime_ms: lifetime.num_milliseconds(),
        }
    }

    /// Mint a session token for `identity`, expiring one lifetime from now.
    pub fn create_session(&self, identity: &str) -> Result<String, AuthError> {
        self.create_session_at(identity, Utc::now().timestamp_millis())
    }

    /// Mint a session token issued at an explicit clock reading.
    pub fn create_session_at(&self, identity: &str, now_ms: i64) -> Result<String, AuthError> {
        let claims = SessionClaims {
            sub: identity.to_string(),
            iat: now_ms,
            exp: now_ms + self.lifetime_ms,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Token(format!("Failed to mint session token: {e}")))
    }

    /// Check a token against the current clock.
    pub fn validate_session(&self, token: &str) -> SessionStatus {
        self.validate_session_at(token, Utc::now().timestamp_millis())
    }

    /// Check a token against an explicit clock reading.
    pub fn validate_session_at(&self, token: &str, now_ms: i64) -> SessionStatus {
        // Expiry lives in the claims at millisecond precision, so the
        // comparison happens here rather than in jsonwebtoken's second-based
        // `exp` check.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(data) if now_ms < data.claims.exp => SessionStatus {
                is_valid: true,
                identity: Some(data.claims.sub),
            },
            _ => SessionStatus::invalid(),
        }
    }
}
