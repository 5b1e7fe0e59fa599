use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::{FetchError, TicketSource};
use crate::model::ticket::Snapshot;

/// Plain GET against a fixed URL, no parameters, no auth.
pub struct HttpTicketSource {
    url: String,
    client: reqwest::Client,
}

impl HttpTicketSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        debug!(url = %self.url, "requesting tickets");
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = resp.bytes().await.map_err(|source| FetchError::Request {
            url: self.url.clone(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Payload {
            url: self.url.clone(),
            source,
        })
    }
}
