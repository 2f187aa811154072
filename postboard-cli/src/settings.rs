use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use postboard_client::HttpConfig;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) api_url: String,
    pub(crate) connect_timeout_secs: u64,
    pub(crate) request_timeout_secs: u64,
    pub(crate) log_level: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("POSTBOARD_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let connect_timeout_secs = parse_positive(&lookup, "POSTBOARD_CONNECT_TIMEOUT_SECS", 5)?;
        let request_timeout_secs = parse_positive(&lookup, "POSTBOARD_REQUEST_TIMEOUT_SECS", 15)?;
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "warn".to_string());

        Ok(Self {
            api_url,
            connect_timeout_secs,
            request_timeout_secs,
            log_level,
        })
    }

    /// Конфигурация HTTP-транспорта; `server` из флага CLI перекрывает окружение.
    pub(crate) fn http_config(&self, server: Option<String>) -> HttpConfig {
        HttpConfig {
            base_url: server.unwrap_or_else(|| self.api_url.clone()),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
