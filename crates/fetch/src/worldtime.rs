use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use chronos_core::Timestamp;
use chronos_ports::{FetchError, TimeFetcher};

/// Time API endpoint for the fixed display timezone
pub const DEFAULT_TIME_URL: &str = "https://worldtimeapi.org/api/timezone/Europe/Moscow";

#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convert infrastructure RestError to the domain FetchError
///
/// Request failures and error statuses are transient from the cycle's
/// point of view; only a payload we cannot decode counts as a parse
/// failure.
impl From<RestError> for FetchError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => FetchError::Network(e.to_string()),
            RestError::Status(code) => FetchError::Network(format!("HTTP status {}", code)),
            RestError::Parse(msg) => FetchError::Parse(msg),
        }
    }
}

#[derive(Deserialize)]
struct TimeResponse {
    datetime: String,
}

/// REST client for the world-time API
///
/// Infrastructure component - handles HTTP communication and payload
/// decoding for one fixed endpoint.
#[derive(Clone)]
pub struct WorldTimeClient {
    client: Client,
    url: String,
}

impl WorldTimeClient {
    pub fn new(url: impl Into<String>) -> Self {
        WorldTimeClient {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current wall-clock time from the API
    pub async fn get_time(&self) -> Result<Timestamp, RestError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RestError::Status(status.as_u16()));
        }

        let text = resp.text().await?;
        parse_payload(&text)
    }
}

impl Default for WorldTimeClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_URL)
    }
}

/// Decode the API payload into a wall-clock timestamp
///
/// The API reports an ISO 8601 datetime carrying the timezone offset;
/// the clock keeps the local wall-clock part.
fn parse_payload(text: &str) -> Result<Timestamp, RestError> {
    let payload: TimeResponse =
        serde_json::from_str(text).map_err(|e| RestError::Parse(e.to_string()))?;
    let parsed = DateTime::parse_from_rfc3339(&payload.datetime)
        .map_err(|e| RestError::Parse(format!("bad datetime '{}': {}", payload.datetime, e)))?;
    Ok(parsed.naive_local())
}

#[async_trait]
impl TimeFetcher for WorldTimeClient {
    async fn fetch_time(&self) -> Result<Timestamp, FetchError> {
        self.get_time().await.map_err(FetchError::from)
    }
}
