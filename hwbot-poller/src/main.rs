//! Homework Status Bot
//!
//! A single-operator notification bot that polls the Practicum
//! homework-status API on a fixed interval and relays review-status
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and settings from environment (or `.env`)
//! - Client: typed HTTP access to the status API (`hwbot-client`)
//! - Notifier: best-effort delivery through the Telegram Bot API
//! - Poller: the fetch → decode → compare → notify cycle on an interval

mod config;
mod notifier;
mod poller;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::notifier::TelegramNotifier;
use crate::poller::StatusPoller;
use hwbot_client::HomeworkClient;

/// Timeout applied to every outbound HTTP request
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot_poller=debug,hwbot_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework status bot");

    // Missing credentials are a one-time gate: fail here, before the loop.
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e:#}");
            return Err(e);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, poll_interval={:?}",
        config.endpoint, config.poll_interval
    );

    let http_client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let client = HomeworkClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http_client.clone(),
    );
    let notifier = TelegramNotifier::with_client(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        http_client,
    );

    info!("Clients initialized");

    let poller = StatusPoller::new(config, Arc::new(client), Arc::new(notifier));

    info!("Starting poll loop");
    if let Err(e) = poller.run().await {
        error!("Poller error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
