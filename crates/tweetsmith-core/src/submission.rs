//! Submission payload and outcome types shared by the form and the client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Generated successfully!";
pub const SUCCESS_ICON: &str = "👏";
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate tweet ideas. Please try again.";

/// Body of `POST /api/submit`. Built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub description: String,
    pub selected_options: BTreeMap<String, String>,
}

/// Why a submission did not produce results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The service answered 429.
    #[error("rate limited by the generation service")]
    RateLimited,

    /// A non-success HTTP status or a transport failure (connect, timeout).
    #[error("request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    /// Anything that is not a recognized transport failure, e.g. a body
    /// that does not parse.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        SubmitError::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// Notice shown to the user, or `None` when the error is diagnostics-only.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SubmitError::RateLimited => Some(RATE_LIMIT_MESSAGE),
            SubmitError::RequestFailed { .. } => Some(GENERIC_FAILURE_MESSAGE),
            SubmitError::Unexpected(_) => None,
        }
    }
}

/// Result of one round-trip to the generation service.
pub type SubmitOutcome = std::result::Result<Vec<String>, SubmitError>;
