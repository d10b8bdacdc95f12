//! Status API endpoint

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::HomeworkClient;
use crate::error::{ClientError, Result};

impl HomeworkClient {
    /// Fetch homework review statuses changed since `from_date`
    ///
    /// Issues a GET request with the `Authorization: OAuth <token>` header
    /// and the cursor as a query parameter. No retries are attempted; every
    /// failure propagates as a single [`ClientError`].
    ///
    /// # Arguments
    /// * `from_date` - Unix-timestamp cursor; `0` requests the full history
    ///
    /// # Returns
    /// The JSON body of a successful response. Shape validation is the
    /// caller's concern.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("requesting homework statuses (from_date={from_date})");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::OK {
            response
                .json()
                .await
                .map_err(|e| ClientError::Parse(format!("failed to parse JSON response: {e}")))
        } else if status == StatusCode::INTERNAL_SERVER_ERROR || status == StatusCode::REQUEST_TIMEOUT
        {
            Err(ClientError::api_error(
                status.as_u16(),
                "homework API reported a failure",
            ))
        } else {
            Err(ClientError::api_error(
                status.as_u16(),
                "unexpected status code",
            ))
        }
    }
}
