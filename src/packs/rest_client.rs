//! Pack source backed by the cube's REST API.

use super::{PackSource, PackSourceError};
use crate::draft::Pack;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP pack source calling `GET {base_url}/draft/pack`.
#[derive(Debug, Clone)]
pub struct RestPackSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestPackSource {
    /// Creates a client for the API at `base_url`.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, PackSourceError> {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PackSourceError::new(format!("Failed to build HTTP client: {}", e)))?;
        info!("Created REST pack source");
        Ok(Self { base_url, client })
    }

    /// The API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turns a failed response into the API's own message when it sent one.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("API error: {}", status.as_u16()))
    }
}

#[async_trait::async_trait]
impl PackSource for RestPackSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_pack(&self) -> Result<Pack, PackSourceError> {
        let url = format!("{}/draft/pack", self.base_url);
        debug!(url = %url, "Requesting draft pack");

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Draft pack request failed");
                PackSourceError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Draft pack API error");
            return Err(PackSourceError::new(Self::error_message(status, &body)));
        }

        let pack: Pack = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode draft pack");
            PackSourceError::new(format!("Invalid pack payload: {}", e))
        })?;

        debug!(cards = pack.len(), "Received pack");
        Ok(pack)
    }

    fn name(&self) -> &str {
        "cube API"
    }
}
