use crate::types::{AuthError, SecurityConfig};
use chrono::Duration;
use std::env;

/// Load the security configuration from the environment, falling back to the
/// development defaults for anything unset.
pub fn load_config() -> Result<SecurityConfig, AuthError> {
    let defaults = SecurityConfig::default();

    // 1. Secrets
    let hash_salt = env::var("AUTHGATE_HASH_SALT").unwrap_or(defaults.hash_salt);
    let token_secret = env::var("AUTHGATE_TOKEN_SECRET").unwrap_or(defaults.token_secret);

    // 2. Tunables
    let hash_iterations = env::var("AUTHGATE_HASH_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.hash_iterations);

    let session_lifetime_hours = env::var("AUTHGATE_SESSION_LIFETIME_HOURS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| defaults.session_lifetime.num_hours());

    let max_attempts = env::var("AUTHGATE_MAX_LOGIN_ATTEMPTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.max_attempts);

    let attempt_window_minutes = env::var("AUTHGATE_ATTEMPT_WINDOW_MINUTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| defaults.attempt_window.num_minutes());

    // 3. Create the final config
    let config = SecurityConfig {
        hash_salt,
        hash_iterations,
        token_secret,
        session_lifetime: Duration::hours(session_lifetime_hours),
        max_attempts,
        attempt_window: Duration::minutes(attempt_window_minutes),
    };

    // 4. Validate the config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &SecurityConfig) -> Result<(), AuthError> {
    if config.hash_salt.is_empty() {
        return Err(AuthError::Config("Hash salt can't be empty".to_string()));
    }

    if config.token_secret.is_empty() {
        return Err(AuthError::Config("Token secret can't be empty".to_string()));
    }

    if config.hash_iterations == 0 {
        return Err(AuthError::Config("Hash iteration count must be non-zero".to_string()));
    }

    if config.max_attempts == 0 {
        return Err(AuthError::Config("Max login attempts must be non-zero".to_string()));
    }

    if config.session_lifetime <= Duration::zero() {
        return Err(AuthError::Config("Session lifetime must be positive".to_string()));
    }

    if config.attempt_window <= Duration::zero() {
        return Err(AuthError::Config("Attempt window must be positive".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SecurityConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.hash_iterations, 10_000);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.session_lifetime, Duration::hours(24));
        assert_eq!(config.attempt_window, Duration::minutes(15));
    }

    #[test]
    fn test_empty_salt_rejected() {
        let config = SecurityConfig {
            hash_salt: String::new(),
            ..SecurityConfig::default()
        };
        assert!(matches!(validate_config(&config), Err(AuthError::Config(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = SecurityConfig {
            hash_iterations: 0,
            ..SecurityConfig::default()
        };
        assert!(matches!(validate_config(&config), Err(AuthError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("AUTHGATE_HASH_SALT", "test_salt");
        env::set_var("AUTHGATE_MAX_LOGIN_ATTEMPTS", "3");

        let config = load_config().expect("config should load");
        assert_eq!(config.hash_salt, "test_salt");
        assert_eq!(config.max_attempts, 3);

        env::remove_var("AUTHGATE_HASH_SALT");
        env::remove_var("AUTHGATE_MAX_LOGIN_ATTEMPTS");
    }
}
