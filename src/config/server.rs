//! HTTP listener settings for the query service

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Where the query endpoints listen and how requests are bounded.
///
/// Read from `FIREAID__SERVER__*`; every field has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface for the listener; `0.0.0.0` inside the container
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Selects JSON log output when `production`
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on a whole request, store and feed calls included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Deployment stage
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Listener address; fails when `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ValidationError::InvalidSocketAddr(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Rejects port 0, a request timeout outside `1..=300` seconds and an
    /// unparseable listener address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

// Driver chatter stays at warn; our own spans at debug.
fn default_log_level() -> String {
    "info,fireaid=debug,tower_http=debug,mongodb=warn".to_string()
}

fn default_request_timeout() -> u64 {
    60
}
