//! Poller configuration
//!
//! Defines all configurable parameters for the bot: the three required
//! credentials, the status endpoint, and the poll interval. Credentials
//! are a one-time startup gate; a missing value must end the process
//! before the loop starts.

use std::time::Duration;

use anyhow::Result;

/// Default status endpoint of the Practicum API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default poll interval
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Poller configuration
///
/// Immutable for the process lifetime once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework-status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat that receives notifications
    pub telegram_chat_id: String,

    /// Full URL of the status endpoint
    pub endpoint: String,

    /// How often to poll the status API
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a configuration with the default endpoint and interval
    pub fn new(practicum_token: String, telegram_token: String, telegram_chat_id: String) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - ENDPOINT (optional, default: the Practicum status URL)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    pub fn from_env() -> Result<Self> {
        let practicum_token = require_var("PRACTICUM_TOKEN")?;
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require_var("TELEGRAM_CHAT_ID")?;

        let endpoint =
            std::env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id.is_empty() {
            anyhow::bail!("telegram_chat_id cannot be empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{name} environment variable not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(
            "practicum-token".to_string(),
            "telegram-token".to_string(),
            "12345".to_string(),
        )
    }

    #[test]
    fn test_new_applies_defaults() {
        let config = test_config();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_credentials_fail_validation() {
        let mut config = test_config();
        config.practicum_token = String::new();
        assert!(config.validate().is_err());

        let mut config = test_config();
        config.telegram_token = String::new();
        assert!(config.validate().is_err());

        let mut config = test_config();
        config.telegram_chat_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_scheme_is_validated() {
        let mut config = test_config();
        config.endpoint = "practicum.yandex.ru/api".to_string();
        assert!(config.validate().is_err());

        config.endpoint = "https://practicum.yandex.ru/api".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_fails_validation() {
        let mut config = test_config();
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
