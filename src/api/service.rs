use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RepoMetrics, UserProfile};

/// The metrics backend as seen by the orchestrator.
///
/// [`MetricsClient`](crate::api::MetricsClient) is the HTTP implementation;
/// tests drive the orchestrator with in-memory stubs.
#[async_trait]
pub trait MetricsService: Send + Sync {
    async fn repo_metrics(&self, owner: &str, repo: &str) -> Result<RepoMetrics>;

    async fn user_profile(&self, username: &str) -> Result<UserProfile>;

    /// Startup probe; `true` when the backend reports itself healthy.
    async fn health(&self) -> Result<bool>;

    fn base_url(&self) -> &str;
}
