//! Telegram notifier
//!
//! Delivers notification messages through the Telegram Bot API. Delivery
//! is best-effort from the poller's point of view: failures here are
//! logged by the caller and never abort a poll cycle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL of the Telegram Bot API
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Errors that can occur while delivering a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed at the transport level
    #[error("Telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Bot API answered with `ok: false`
    #[error("Telegram rejected the message: {0}")]
    Rejected(String),
}

/// Message sink for status-change notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one plain-text message to the configured chat.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Notifier backed by the Bot API `sendMessage` method
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier for the given bot token and chat
    pub fn new(token: String, chat_id: String) -> Self {
        Self::with_client(token, chat_id, reqwest::Client::new())
    }

    /// Creates a notifier with a custom HTTP client
    pub fn with_client(token: String, chat_id: String, client: reqwest::Client) -> Self {
        Self {
            client,
            token,
            chat_id,
        }
    }

    fn send_message_url(&self) -> String {
        format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", self.token)
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Bot API response envelope
#[derive(Deserialize)]
struct ApiEnvelope {
    ok: bool,
    description: Option<String>,
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let envelope: ApiEnvelope = response.json().await?;

        if !envelope.ok {
            return Err(NotifyError::Rejected(
                envelope
                    .description
                    .unwrap_or_else(|| "sendMessage failed".to_string()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_url_embeds_token() {
        let notifier = TelegramNotifier::new("123:abc".to_string(), "42".to_string());
        assert_eq!(
            notifier.send_message_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn envelope_with_description() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"ok": false, "description": "Bad Request: chat not found"}"#)
                .unwrap();
        assert!(!envelope.ok);
        assert_eq!(
            envelope.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }

    #[test]
    fn envelope_without_description() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"ok": true, "result": {"message_id": 1}}"#).unwrap();
        assert!(envelope.ok);
        assert!(envelope.description.is_none());
    }
}
