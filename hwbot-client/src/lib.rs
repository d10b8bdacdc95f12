//! Homework Status Client
//!
//! A small, type-safe HTTP client for the Practicum homework-status API.
//!
//! The client issues authorized status requests and maps transport results
//! onto a tagged [`ClientError`], so callers can handle every failure kind
//! in one place instead of inspecting raw responses.
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::HomeworkClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HomeworkClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "my-oauth-token",
//!     );
//!
//!     // 0 requests the full status history
//!     let response = client.homework_statuses(0).await?;
//!
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;

pub use error::{ClientError, Result};

use reqwest::Client;

/// HTTP client for the homework-status API
///
/// Holds the endpoint URL, the OAuth token sent with every request, and the
/// underlying HTTP client instance.
#[derive(Debug, Clone)]
pub struct HomeworkClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token for the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl HomeworkClient {
    /// Create a new homework status client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the status endpoint
    /// * `token` - OAuth token for the `Authorization` header
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use hwbot_client::HomeworkClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HomeworkClient::with_client(
    ///     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
    ///     "my-oauth-token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
