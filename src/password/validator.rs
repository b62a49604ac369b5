//! Password strength rules.
//!
//! Five independent binary rules, each worth 20 points of the 0-100 score:
//! - Minimum length
//! - Uppercase letter
//! - Lowercase letter
//! - Digit
//! - Special character from a fixed set
//!
//! `is_valid` means every rule passed. Callers may bucket lower scores for
//! progressive UI feedback, but only a fully valid password may be persisted.

use serde::Serialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

const RULE_WEIGHT: u8 = 20;

/// Outcome of scoring one candidate password. Recomputed per call, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub is_valid: bool,
    pub score: u8,
    /// One entry per failed rule, in rule order.
    pub issues: Vec<String>,
}

/// Score a candidate password against the five rules.
///
/// Total over all inputs, including the empty string (which fails the length
/// rule). Pure function, no side effects.
pub fn validate_password(candidate: &str) -> StrengthReport {
    let mut issues = Vec::new();

    if candidate.len() < MIN_PASSWORD_LENGTH {
        issues.push(format!("must be at least {MIN_PASSWORD_LENGTH} characters long"));
    }
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push("must contain at least one uppercase letter".to_string());
    }
    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        issues.push("must contain at least one lowercase letter".to_string());
    }
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        issues.push("must contain at least one digit".to_string());
    }
    if !candidate.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        issues.push("must contain at least one special character".to_string());
    }

    let score = 100 - RULE_WEIGHT * issues.len() as u8;

    StrengthReport {
        is_valid: issues.is_empty(),
        score,
        issues,
    }
}
