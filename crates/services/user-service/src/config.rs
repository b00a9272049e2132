//! User service configuration.

use std::env;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Load the seed records into a fresh store
    pub seed: bool,
    /// Log filter directive
    pub log_level: String,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed: env::var("USER_SERVICE_SEED")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            seed: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Parse a boolean environment flag; unknown values yield `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
