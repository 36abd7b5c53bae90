//! HTTP client for the trade feed service.

use blotter_core::types::TradeEnvelope;
use tracing::debug;

use crate::error::FeedError;

/// HTTP client for the trade feed service.
///
/// Holds the feed base URL and a reusable connection pool. Cloning is
/// cheap; the underlying pool is shared.
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
    client: reqwest::Client,
}

impl FeedClient {
    /// Create a new feed client.
    ///
    /// `base_url` is the feed service root, e.g. `http://localhost:8080`;
    /// the trades path is appended per request.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the trade batch from `/api/trades`.
    ///
    /// Returns the raw wire records; callers extract validated options per
    /// record through [`TradeEnvelope::fx_option`]. Transport failures map
    /// to [`FeedError::Http`], non-success statuses to
    /// [`FeedError::Status`], and an unparseable body to
    /// [`FeedError::Decode`].
    pub async fn get_trades(&self) -> Result<Vec<TradeEnvelope>, FeedError> {
        let url = format!("{}/api/trades", self.base_url);
        debug!("fetching trades from {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let body = response.text().await?;
        let records: Vec<TradeEnvelope> = serde_json::from_str(&body)?;
        debug!("fetched {} trade records", records.len());
        Ok(records)
    }
}
