//! Hub configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ConfigError;

/// Main hub configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Outbound request timeouts
    pub timeouts: TimeoutConfig,
    /// Inbound request limits
    pub limits: LimitsConfig,
}

impl HubConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeouts.verification_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "verification timeout cannot be 0".into(),
            ));
        }

        if self.timeouts.delivery_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "delivery timeout cannot be 0".into(),
            ));
        }

        if self.timeouts.connect_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "connect timeout cannot be 0".into(),
            ));
        }

        if self.limits.max_payload_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_payload_bytes cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8080)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8080,
        }
    }
}

/// Timeouts for the two outbound requests.
///
/// A timeout is reported exactly like any other transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole verification GET, body included
    pub verification_secs: u64,
    /// Whole delivery POST
    pub delivery_secs: u64,
    /// TCP/TLS connect phase of either request
    pub connect_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            verification_secs: 10,
            delivery_secs: 10,
            connect_secs: 5,
        }
    }
}

impl TimeoutConfig {
    pub fn verification(&self) -> Duration {
        Duration::from_secs(self.verification_secs)
    }

    pub fn delivery(&self) -> Duration {
        Duration::from_secs(self.delivery_secs)
    }

    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Inbound request limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted request body, subscription or publish (default 1 MiB)
    pub max_payload_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 1024 * 1024,
        }
    }
}
