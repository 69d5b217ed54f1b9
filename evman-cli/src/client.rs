//! HTTP client for communicating with evman-server.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use evman_core::{Event, EventDraft, EventStatus};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for evman-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

// Response types matching server API

/// Event as served by the API: the stored fields plus the derived
/// display date. Filtering and sorting always use the raw `date`;
/// `display_date` is rendered verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEvent {
    #[serde(flatten)]
    pub event: Event,
    pub display_date: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl Client {
    /// Build a client against `EVMAN_SERVER_URL` (or the local default).
    /// Every call carries a fixed timeout; a slow server surfaces as a
    /// plain request failure.
    pub fn new() -> Result<Self> {
        let base_url =
            std::env::var("EVMAN_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<HealthResponse> {
        let resp = self
            .http
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<RemoteEvent>> {
        let resp = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// GET /api/events/:id
    pub async fn get_event(&self, id: &str) -> Result<RemoteEvent> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// POST /api/events
    pub async fn create_event(&self, draft: &EventDraft) -> Result<RemoteEvent> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// PUT /api/events/:id
    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<RemoteEvent> {
        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// PATCH /api/events/:id/status
    pub async fn patch_status(&self, id: &str, status: EventStatus) -> Result<RemoteEvent> {
        let resp = self
            .http
            .patch(format!("{}/api/events/{}/status", self.base_url, id))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// DELETE /api/events/:id
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(())
    }
}
