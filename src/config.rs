//! Configuration module for the spread alerts service

use serde::Deserialize;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the upstream market data REST API
    pub upstream_endpoint: String,

    /// Address the HTTP server binds to
    pub http_host: IpAddr,
    pub http_port: u16,

    /// Per-request timeout for upstream calls
    pub upstream_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let upstream_endpoint = env::var("UPSTREAM_ENDPOINT")
            .unwrap_or_else(|_| "https://www.buda.com/api/v2".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            upstream_endpoint,
            http_host: env::var("HTTP_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()?,
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            upstream_timeout_ms: env::var("UPSTREAM_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_endpoint: "https://www.buda.com/api/v2".to_string(),
            http_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: 3000,
            upstream_timeout_ms: 5000,
        }
    }
}
