//! Layer configuration
//!
//! All configuration items can be overridden via environment variables:
//!
//! | Environment variable | Default | Description |
//! |----------------------|---------|-------------|
//! | FATOORA_API_URL | http://localhost:8000 | Invoice server base URL |
//! | FATOORA_HTTP_TIMEOUT_SECS | 30 | HTTP request timeout (seconds) |
//! | FATOORA_LOG_LEVEL | info | Log level |
//! | FATOORA_LOG_DIR | (unset) | Optional directory for daily log files |

use fatoora_client::ClientConfig;

/// Configuration for the interaction layer
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Invoice server base URL
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional log directory; when set, logs also go to a daily file
    pub log_dir: Option<String>,
}

impl UiConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("FATOORA_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            http_timeout_secs: std::env::var("FATOORA_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("FATOORA_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("FATOORA_LOG_DIR").ok(),
        }
    }

    /// Client configuration derived from this layer configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_base_url).with_timeout(self.http_timeout_secs)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".into(),
            http_timeout_secs: 30,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_client_defaults() {
        let config = UiConfig::default();
        let client = config.client_config();
        assert_eq!(client.base_url, "http://localhost:8000");
        assert_eq!(client.timeout, 30);
    }
}
