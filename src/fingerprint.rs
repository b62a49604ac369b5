//! Client fingerprinting.
//!
//! Derives a short, stable, non-reversible identifier from environment
//! signals supplied by the caller (user agent, screen geometry, timezone).
//! Nothing is persisted; the identifier is recomputed on every use and keys
//! the rate limiter's attempt map. Distinct devices with identical signals
//! collide — an accepted limit of a signal-only fingerprint.

use sha2::{Digest, Sha256};

/// Printable length of the derived identifier.
pub const FINGERPRINT_LENGTH: usize = 16;

/// Environment signals a client can observe about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSignals {
    pub user_agent: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// IANA timezone name, e.g. `Europe/Paris`.
    pub timezone: String,
}

impl DeviceSignals {
    /// Derive the opaque identifier for these signals.
    pub fn identifier(&self) -> String {
        let raw = format!(
            "{}|{}x{}|{}",
            self.user_agent, self.screen_width, self.screen_height, self.timezone
        );

        let digest = Sha256::digest(raw.as_bytes());
        let mut id = hex::encode(digest);
        id.truncate(FINGERPRINT_LENGTH);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> DeviceSignals {
        DeviceSignals {
            user_agent: "Mozilla/5.0".to_string(),
            screen_width: 1920,
            screen_height: 1080,
            timezone: "Europe/Paris".to_string(),
        }
    }

    #[test]
    fn test_identifier_is_stable() {
        assert_eq!(signals().identifier(), signals().identifier());
    }

    #[test]
    fn test_identifier_shape() {
        let id = signals().identifier();
        assert_eq!(id.len(), FINGERPRINT_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_each_signal_feeds_the_identifier() {
        let base = signals().identifier();

        let mut changed = signals();
        changed.user_agent = "Mozilla/4.0".to_string();
        assert_ne!(changed.identifier(), base);

        let mut changed = signals();
        changed.screen_width = 1280;
        assert_ne!(changed.identifier(), base);

        let mut changed = signals();
        changed.screen_height = 720;
        assert_ne!(changed.identifier(), base);

        let mut changed = signals();
        changed.timezone = "America/New_York".to_string();
        assert_ne!(changed.identifier(), base);
    }
}
