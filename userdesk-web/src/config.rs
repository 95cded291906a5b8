//! Frontend configuration module
//!
//! Settings are baked in at compile time from environment variables so the
//! bundle can be pointed at a different backend without code changes.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Frontend configuration for backend access, notifications and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Root URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// How long a notification stays visible
    pub notification_timeout_ms: u32,
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("USERDESK_API_BASE_URL"),
            option_env!("USERDESK_NOTIFICATION_TIMEOUT_MS"),
            option_env!("USERDESK_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw values, falling back to defaults for
    /// anything missing or unparsable.
    pub fn from_values(
        api_base_url: Option<&str>,
        notification_timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let notification_timeout_ms = notification_timeout_ms
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_NOTIFICATION_TIMEOUT_MS);

        let log_level = log_level
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            notification_timeout_ms,
            log_level,
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
