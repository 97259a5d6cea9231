//! # API Configuration
//!
//! Endpoint configuration for the storefront client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     SATCHEL_API_URL=https://shop.example.com                            │
//! │     SATCHEL_API_TIMEOUT_SECS=10                                         │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                    │
//! │     http://127.0.0.1:3000, 30 second timeout                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::debug;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "SATCHEL_API_URL";

/// Environment variable overriding the request timeout (seconds).
pub const API_TIMEOUT_ENV: &str = "SATCHEL_API_TIMEOUT_SECS";

/// Default base URL: the local storefront backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default request timeout. The sale submission has no cancellation, so a
/// hung request must eventually become a Failed transition on its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Storefront API endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the storefront backend (no trailing slash required).
    pub base_url: String,

    /// Per-request timeout for both endpoints.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Builds a config from defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = ApiConfig::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            debug!(url = %url, "API base URL from environment");
            config.base_url = url;
        }

        if let Ok(secs) = std::env::var(API_TIMEOUT_ENV) {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Config for an explicit base URL (used by tests and embedding code).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        }
    }
}
