use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Service configuration, loaded from environment variables / .env.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Origin that site-relative links are resolved against.
    #[serde(default = "default_site_origin")]
    pub site_origin: String,

    /// Upper bound on establishing a connection to the site.
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Upper bound on waiting for response data once connected.
    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Maximum number of detail pages fetched at once during a fan-out
    /// (0 = one task per item, no limit).
    #[serde(default)]
    pub max_concurrent: usize,

    /// Optional HTTP proxy for all outbound requests.
    #[serde(default)]
    pub proxy: Option<String>,

    /// `text` (default) or `json` log lines.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}
fn default_site_origin() -> String {
    "https://btvplus.bg".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_log_format() -> String {
    "text".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            site_origin: default_site_origin(),
            connect_timeout_secs: default_timeout_secs(),
            read_timeout_secs: default_timeout_secs(),
            max_concurrent: 0,
            proxy: None,
            log_format: default_log_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env if present (ignore errors — it may not exist)
        let _ = dotenvy::dotenv();

        envy::from_env::<AppConfig>().context("Failed to load config from environment")
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// `None` when fan-out width is unbounded.
    pub fn fan_out_limit(&self) -> Option<usize> {
        (self.max_concurrent > 0).then_some(self.max_concurrent)
    }
}
