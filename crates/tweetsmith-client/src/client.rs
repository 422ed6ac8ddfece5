//! HTTP client for the tweet generation service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use tweetsmith_core::{RequestPayload, SubmitError, SubmitOutcome};

use crate::protocol::{SubmitResponse, SUBMIT_PATH};

/// Something that can carry one submission to the service.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit(&self, payload: &RequestPayload) -> SubmitOutcome;
}

/// Client for the generation API.
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl GenerationClient {
    /// Fails only when the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post the payload once and classify whatever comes back.
    #[instrument(skip(self, payload), fields(url = %self.base_url))]
    pub async fn submit(&self, payload: &RequestPayload) -> SubmitOutcome {
        let url = format!("{}{}", self.base_url, SUBMIT_PATH);

        let resp = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        debug!(%status, "Submit response received");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SubmitError::RateLimited);
        }
        if !status.is_success() {
            return Err(SubmitError::request_failed(
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }
        // The service answers 200; any other 2xx is not something we know how to read.
        if status != StatusCode::OK {
            return Err(SubmitError::Unexpected(format!(
                "unexpected success status {status}"
            )));
        }

        let body = resp.bytes().await.map_err(transport_error)?;
        let parsed: SubmitResponse = serde_json::from_slice(&body)
            .map_err(|e| SubmitError::Unexpected(format!("malformed response body: {e}")))?;

        debug!("Received {} suggestions", parsed.tweet.len());
        Ok(parsed.tweet)
    }
}

#[async_trait]
impl SubmitTransport for GenerationClient {
    async fn submit(&self, payload: &RequestPayload) -> SubmitOutcome {
        GenerationClient::submit(self, payload).await
    }
}

/// Failures from `send()` and body reads. Status codes are classified
/// before these can happen, so none of them carries one.
fn transport_error(err: reqwest::Error) -> SubmitError {
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    };
    SubmitError::request_failed(None, message)
}
