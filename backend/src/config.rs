//! Server configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `HOST`: Bind host (default: `0.0.0.0`)
//! - `PORT`: Bind port (default: `8080`)
//! - `ACTIVITY_UTC_OFFSET_MINUTES`: Offset used to bucket submissions into
//!   local days (default: `330`, i.e. +05:30; must lie strictly within ±24h)

use std::env;
use std::net::SocketAddr;

use crate::models::DayBoundary;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime settings of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub day_boundary: DayBoundary,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            day_boundary: DayBoundary::default(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// Unset variables take their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT '{}': {}", raw, e))?,
            Err(_) => defaults.port,
        };

        let day_boundary = match env::var("ACTIVITY_UTC_OFFSET_MINUTES") {
            Ok(raw) => {
                let minutes = raw.trim().parse::<i32>().map_err(|e| {
                    format!("Invalid ACTIVITY_UTC_OFFSET_MINUTES '{}': {}", raw, e)
                })?;
                DayBoundary::from_offset_minutes(minutes).ok_or_else(|| {
                    format!(
                        "ACTIVITY_UTC_OFFSET_MINUTES must be within ±1439, got {}",
                        minutes
                    )
                })?
            }
            Err(_) => defaults.day_boundary,
        };

        Ok(Self {
            host,
            port,
            day_boundary,
        })
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}
