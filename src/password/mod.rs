//! Password credential handling: digest derivation, strength rules, and
//! secure generation.

pub mod generator;
pub mod hasher;
pub mod validator;

pub use generator::{generate_password, DEFAULT_PASSWORD_LENGTH};
pub use hasher::PasswordHasher;
pub use validator::{validate_password, StrengthReport, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};
