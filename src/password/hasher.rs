//! Password digest derivation and verification.
//!
//! Digests are deterministic: the same plaintext under the same salt always
//! produces the same hex string, which is what makes verification a pure
//! recompute-and-compare. PBKDF2-HMAC-SHA256 at a fixed iteration cost keeps
//! the digest non-reversible.

use std::num::NonZeroU32;

use ring::pbkdf2;
use subtle::ConstantTimeEq;

use crate::types::{AuthError, SecurityConfig};

/// Digest length in bytes, before hex encoding.
const DIGEST_LENGTH: usize = 32;

static PBKDF2_ALG: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

pub struct PasswordHasher {
    salt: Vec<u8>,
    iterations: NonZeroU32,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("salt", &"<hidden>")
            .field("iterations", &self.iterations)
            .finish()
    }
}

impl PasswordHasher {
    pub fn new(salt: &str, iterations: u32) -> Result<Self, AuthError> {
        if salt.is_empty() {
            return Err(AuthError::Config("Hash salt can't be empty".to_string()));
        }
        let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
            AuthError::Config("Hash iteration count must be non-zero".to_string())
        })?;

        Ok(Self {
            salt: salt.as_bytes().to_vec(),
            iterations,
        })
    }

    pub fn from_config(config: &SecurityConfig) -> Result<Self, AuthError> {
        Self::new(&config.hash_salt, config.hash_iterations)
    }

    /// Derive the stored digest for a plaintext password.
    pub fn hash(&self, plaintext: &str) -> String {
        let mut derived = [0u8; DIGEST_LENGTH];
        pbkdf2::derive(
            PBKDF2_ALG,
            self.iterations,
            &self.salt,
            plaintext.as_bytes(),
            &mut derived,
        );
        hex::encode(derived)
    }

    /// Check a plaintext password against a previously stored digest.
    ///
    /// The comparison runs over the full recomputed digest in constant time,
    /// so a mismatch leaks no matching-prefix information.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        self.hash(plaintext).as_bytes().ct_eq(digest.as_bytes()).into()
    }
}
