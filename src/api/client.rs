use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;

use crate::api::service::MetricsService;
use crate::error::{Error, Result};
use crate::models::{ProfilePayload, RepoMetrics, UserProfile};

/// HTTP client for the metrics backend.
///
/// Bodies are decoded to JSON before typed decoding so that error payloads
/// (`detail` or `error` strings) are surfaced even when they arrive with a
/// success status.
pub struct MetricsClient {
    client: Client,
    base_url: String,
}

impl MetricsClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(concat!("ghmetrics/", env!("CARGO_PKG_VERSION")))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches a URL and applies the shared error-surfacing rules: a
    /// non-success status surfaces the body's `detail` or `error` message
    /// (falling back to `not_found`), and an `error` field in a success
    /// body is treated as a failure too.
    async fn get_json(&self, url: &str, not_found: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if !status.is_success() {
            let message = body
                .get("detail")
                .and_then(Value::as_str)
                .or_else(|| body.get("error").and_then(Value::as_str))
                .unwrap_or(not_found);
            tracing::warn!("Request failed ({}): {}", status, message);
            return Err(Error::Api(message.to_string()));
        }

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            tracing::warn!("Backend reported an error: {}", message);
            return Err(Error::Api(message.to_string()));
        }

        Ok(body)
    }
}

#[async_trait]
impl MetricsService for MetricsClient {
    async fn repo_metrics(&self, owner: &str, repo: &str) -> Result<RepoMetrics> {
        let url = format!("{}/api/repo/{}/{}", self.base_url, owner, repo);
        tracing::info!("Fetching repository metrics: {}/{}", owner, repo);

        let body = self.get_json(&url, "Repository not found").await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn user_profile(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/api/user/{}/profile", self.base_url, username);
        tracing::info!("Fetching user profile: {}", username);

        let body = self.get_json(&url, "User not found").await?;
        let payload: ProfilePayload = serde_json::from_value(body)?;
        Ok(payload.into())
    }

    async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(false);
        }
        let body: Value = serde_json::from_slice(&response.bytes().await?)?;
        Ok(body.get("status").and_then(Value::as_str) == Some("healthy"))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
