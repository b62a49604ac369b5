//! Credential and session security for a single-operator admin console.
//!
//! This crate is the authentication gate behind a client-held login: one
//! password digest, one active session token, one in-memory rate-limit table
//! keyed by a device fingerprint. Everything is synchronous and in-process.
//! Persisting the digest and token is the caller's concern, as is every piece
//! of user-facing messaging — this crate supplies facts (valid/invalid,
//! remaining attempts, reset time, strength issues), never text to display.
//!
//! The usual flow: derive an identifier from [`fingerprint::DeviceSignals`],
//! let [`gate::AuthGate::login`] run the rate-limited verification, and hand
//! the returned token to storage. [`gate::AuthGate::accept_new_password`]
//! gates first-run setup and password changes on the strength rules, with
//! [`password::generate_password`] available to propose one.

pub mod config;
pub mod fingerprint;
pub mod gate;
pub mod password;
pub mod rate_limit;
pub mod session;
pub mod types;

// Re-export commonly used types and functions
pub use config::load_config;
pub use fingerprint::DeviceSignals;
pub use gate::{AuthGate, LoginOutcome};
pub use password::{generate_password, validate_password, PasswordHasher, StrengthReport};
pub use rate_limit::{LoginRateLimiter, RateLimitDecision};
pub use session::{SessionStatus, SessionTokenManager};
pub use types::{AuthError, SecurityConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
