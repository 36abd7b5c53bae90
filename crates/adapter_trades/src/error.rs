//! Error types for the trade feed adapter.

use thiserror::Error;

/// Trade feed fetch errors.
///
/// A fetch fails as a whole with exactly one of these. Records that
/// deserialize but fail validation are not a fetch error; the kernel
/// reports those per record as
/// [`blotter_core::types::MalformedTrade`].
///
/// # Variants
/// - `Http`: The request never produced a response
/// - `Status`: The feed answered with a non-success status
/// - `Decode`: The response body was not a valid trade batch
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("API error: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid trade batch.
    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = FeedError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(format!("{}", err), "API error: 500 Internal Server Error");
    }

    #[test]
    fn test_decode_display() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FeedError::Decode(cause);
        assert!(format!("{}", err).starts_with("malformed feed payload:"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FeedError::Decode(cause);
        let _: &dyn std::error::Error = &err;
    }
}
