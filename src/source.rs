mod wire;

use std::time::Duration;

use chrono_tz::Tz;
use reqwest::Client;
use thiserror::Error;

use crate::status::{ControlLogPage, StatusSnapshot};

pub use wire::{decode_control_log, decode_status, parse_motion_timestamp};

pub const CONTROL_LOG_LIMIT: u32 = 20;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The status source could not produce a usable snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid control log entry at index {index}: {reason}")]
    ControlLogEntry { index: usize, reason: &'static str },

    #[error("invalid motion timestamp: {0}")]
    Timestamp(String),

    #[error("invalid numeric value: {0}")]
    Number(String),
}

/// Fetches snapshots and control log pages from the central server.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    http: Client,
    server_url: String,
    timezone: Tz,
}

impl HttpStatusSource {
    /// `timezone` is the server's local zone, used for naive timestamps.
    pub fn new(server_url: impl Into<String>, timezone: Tz) -> Result<Self, SourceError> {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| SourceError::Request {
                url: server_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            server_url,
            timezone,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn fetch_status(&self) -> Result<StatusSnapshot, SourceError> {
        let url = format!("{}/status", self.server_url);
        let body = self.get_text(&url, &[]).await?;
        decode_status(&body, self.timezone)
    }

    pub async fn fetch_control_log(&self, limit: u32) -> Result<ControlLogPage, SourceError> {
        let url = format!("{}/logs/control", self.server_url);
        let body = self.get_text(&url, &[("limit", limit)]).await?;
        decode_control_log(&body)
    }

    async fn get_text(&self, url: &str, query: &[(&str, u32)]) -> Result<String, SourceError> {
        let request_error = |source| SourceError::Request {
            url: url.to_string(),
            source,
        };

        self.http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)?
            .text()
            .await
            .map_err(request_error)
    }
}
