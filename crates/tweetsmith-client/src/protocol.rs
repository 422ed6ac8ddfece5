//! Request and response types for the generation service.

use serde::Deserialize;

/// Path of the single endpoint, relative to the deployment origin.
pub const SUBMIT_PATH: &str = "/api/submit";

/// Success body. The request body is `tweetsmith_core::RequestPayload`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Generated suggestions, in the order the service produced them.
    pub tweet: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ignores_extra_fields() {
        let parsed: SubmitResponse =
            serde_json::from_str(r#"{"tweet":["a","b"],"model":"x"}"#).unwrap();
        assert_eq!(parsed.tweet, vec!["a", "b"]);
    }

    #[test]
    fn response_requires_tweet_list() {
        assert!(serde_json::from_str::<SubmitResponse>(r#"{"tweets":[]}"#).is_err());
        assert!(serde_json::from_str::<SubmitResponse>(r#"{"tweet":"one"}"#).is_err());
    }
}
