//! Server configuration management.
//!
//! Reads environment variables once at startup; command-line flags take
//! precedence over the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default roster file, relative to the working directory
pub const DEFAULT_ROSTER: &str = "roster.toml";

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// TOML roster to load at startup
    pub roster_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Bind address from the command line
    /// * `roster_override` - Roster path from the command line
    ///
    /// # Errors
    ///
    /// Returns error if `TOURNAMENT_BIND` is set but is not a socket address
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        roster_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(bind_override, roster_override, |key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(
        bind_override: Option<SocketAddr>,
        roster_override: Option<PathBuf>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match bind_override {
            Some(addr) => addr,
            None => {
                let raw = lookup("TOURNAMENT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
                raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "TOURNAMENT_BIND".to_string(),
                    reason: format!("'{}' is not an IP:PORT address", raw),
                })?
            }
        };

        let roster_path = roster_override
            .or_else(|| lookup("TOURNAMENT_ROSTER").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER));

        Ok(Self { bind, roster_path })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
