//! Status poller
//!
//! Polls the homework-status API on a fixed interval, tracks the review
//! status of the most recent submission, and pushes a verdict message to
//! the notifier when that status changes. Each cycle is a reducer over an
//! explicit [`PollState`]; the drive loop only ticks, logs, and carries
//! the state forward.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::notifier::Notifier;
use hwbot_client::{ClientError, HomeworkClient};
use hwbot_core::domain::homework::{DecodeError, HomeworkRecord, ReviewStatus, extract_homeworks};

/// Source of raw status API responses
///
/// Seam over [`HomeworkClient`] so the cycle logic can be driven by
/// scripted responses in tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the raw status payload for the given cursor.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

#[async_trait]
impl StatusSource for HomeworkClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        HomeworkClient::homework_statuses(self, from_date).await
    }
}

/// Poll state threaded through cycle invocations
///
/// `last_status == None` means no valid record has been observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollState {
    /// `from_date` cursor sent to the API. Stays at 0: change detection
    /// compares against the full history on every poll.
    pub cursor: i64,

    /// Most recently observed review status
    pub last_status: Option<ReviewStatus>,
}

impl PollState {
    /// State before the first valid observation
    pub fn new() -> Self {
        Self::default()
    }
}

/// Outcome of a successful poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status changed; a notification was handed to the notifier
    Changed(ReviewStatus),

    /// Status matches the last observation; nothing was sent
    Unchanged(ReviewStatus),
}

/// Everything that can fail a single poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    /// Transport failure or error status from the homework API
    #[error("homework API request failed: {0}")]
    Api(#[from] ClientError),

    /// Response arrived but did not match the documented shape
    #[error("unusable API response: {0}")]
    Decode(#[from] DecodeError),

    /// The homework list was empty; there is nothing to track yet
    #[error("homework list in the API response is empty")]
    NoHomeworks,
}

/// Poller that drives the fetch → decode → compare → notify cycle
pub struct StatusPoller {
    config: Config,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(config: Config, source: Arc<dyn StatusSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            source,
            notifier,
        }
    }

    /// Starts the polling loop
    ///
    /// Runs forever: every interval tick executes one cycle, logs its
    /// outcome, and carries the returned state into the next cycle. No
    /// cycle failure escapes the loop.
    pub async fn run(&self) -> Result<()> {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);
        let mut state = PollState::new();

        loop {
            interval.tick().await;

            debug!("Polling homework statuses (from_date={})", state.cursor);

            let (next, result) = self.run_cycle(state).await;
            state = next;

            match result {
                Ok(CycleOutcome::Changed(status)) => {
                    info!("Review status changed to \"{status}\"");
                }
                Ok(CycleOutcome::Unchanged(status)) => {
                    info!("Status still \"{status}\", no notification sent");
                }
                Err(CycleError::Api(e)) => error!("Homework API request failed: {e}"),
                Err(CycleError::Decode(e)) => error!("Unusable API response: {e}"),
                Err(CycleError::NoHomeworks) => error!("No homeworks in the API response yet"),
            }
        }
    }

    /// Executes one fetch → decode → compare → notify cycle
    ///
    /// Takes the current state and returns the next one alongside the
    /// cycle result, so the logic is testable without the drive loop.
    /// Failed cycles leave the state untouched.
    pub async fn run_cycle(
        &self,
        state: PollState,
    ) -> (PollState, Result<CycleOutcome, CycleError>) {
        let response = match self.source.homework_statuses(state.cursor).await {
            Ok(response) => response,
            Err(e) => return (state, Err(e.into())),
        };

        let homeworks = match extract_homeworks(&response) {
            Ok(homeworks) => homeworks,
            Err(e) => return (state, Err(e.into())),
        };

        // Index 0 is the most recent submission
        let Some(latest) = homeworks.first() else {
            return (state, Err(CycleError::NoHomeworks));
        };

        let record = match HomeworkRecord::from_value(latest) {
            Ok(record) => record,
            Err(e) => return (state, Err(e.into())),
        };

        if state.last_status == Some(record.status) {
            return (state, Ok(CycleOutcome::Unchanged(record.status)));
        }

        let next = PollState {
            last_status: Some(record.status),
            ..state
        };

        self.notify(&record.verdict_line()).await;

        (next, Ok(CycleOutcome::Changed(record.status)))
    }

    /// Hands a message to the notifier, best-effort
    ///
    /// Delivery failure is logged and swallowed; it never fails the cycle
    /// and is not retried until the next status change.
    async fn notify(&self, message: &str) {
        match self.notifier.send(message).await {
            Ok(()) => debug!("Notification sent: {message}"),
            Err(e) => error!("Failed to send notification: {e}"),
        }
    }
}
