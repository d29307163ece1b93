use std::sync::Arc;

use crate::api::MetricsService;
use crate::app::state::{LookupKind, LookupOutcome, ViewMode, ViewState};
use crate::error::Error;
use crate::query::Query;

/// The data-fetch orchestrator: owns the view state and runs lookups
/// against the backend, one settle per invocation.
pub struct Session {
    state: ViewState,
    service: Arc<dyn MetricsService>,
}

impl Session {
    pub fn new(service: Arc<dyn MetricsService>) -> Self {
        Self {
            state: ViewState::new(),
            service,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Switches the active view without fetching; previously fetched data
    /// for that mode is shown again.
    pub fn set_view(&mut self, view: ViewMode) {
        self.state.set_view(view);
    }

    pub async fn search(&mut self, query: &Query) {
        match query {
            Query::Repo { owner, repo } => self.lookup_repo(owner, repo).await,
            Query::User { username } => self.lookup_user(username).await,
        }
    }

    pub async fn lookup_repo(&mut self, owner: &str, repo: &str) {
        let token = self.state.begin(LookupKind::Repo);
        let outcome = match self.service.repo_metrics(owner, repo).await {
            Ok(metrics) => LookupOutcome::RepoLoaded(metrics),
            Err(err) => {
                tracing::error!("Repository lookup failed for {}/{}: {}", owner, repo, err);
                LookupOutcome::RepoFailed(self.surface(&err))
            }
        };
        self.state.settle(token, outcome);
    }

    pub async fn lookup_user(&mut self, username: &str) {
        let token = self.state.begin(LookupKind::User);
        let outcome = match self.service.user_profile(username).await {
            Ok(profile) => LookupOutcome::UserLoaded(profile),
            Err(err) => {
                tracing::error!("User lookup failed for {}: {}", username, err);
                LookupOutcome::UserFailed(self.surface(&err))
            }
        };
        self.state.settle(token, outcome);
    }

    fn surface(&self, err: &Error) -> String {
        surface_error(err, self.service.base_url())
    }
}

/// Converts a lookup failure into the single user-visible message. API
/// errors keep their message verbatim; transport and decode failures get a
/// description naming the backend.
pub fn surface_error(err: &Error, base_url: &str) -> String {
    match err {
        Error::Api(message) => message.clone(),
        Error::Network(_) => format!(
            "Failed to fetch from {}. Check that the backend is running and reachable",
            base_url
        ),
        Error::Decode(err) => format!("Invalid response from backend: {}", err),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{RepoMetrics, UserProfile};
    use async_trait::async_trait;
    use serde_json::json;

    /// Stub backend returning canned outcomes per lookup kind.
    struct StubService {
        repo: Option<RepoMetrics>,
        repo_error: Option<String>,
        user: Option<UserProfile>,
        user_error: Option<String>,
    }

    impl StubService {
        fn empty() -> Self {
            Self {
                repo: None,
                repo_error: None,
                user: None,
                user_error: None,
            }
        }
    }

    #[async_trait]
    impl MetricsService for StubService {
        async fn repo_metrics(&self, _owner: &str, _repo: &str) -> Result<RepoMetrics> {
            match (&self.repo, &self.repo_error) {
                (Some(metrics), _) => Ok(metrics.clone()),
                (None, Some(message)) => Err(Error::Api(message.clone())),
                (None, None) => Err(Error::Api("Repository not found".to_string())),
            }
        }

        async fn user_profile(&self, _username: &str) -> Result<UserProfile> {
            match (&self.user, &self.user_error) {
                (Some(profile), _) => Ok(profile.clone()),
                (None, Some(message)) => Err(Error::Api(message.clone())),
                (None, None) => Err(Error::Api("User not found".to_string())),
            }
        }

        async fn health(&self) -> Result<bool> {
            Ok(true)
        }

        fn base_url(&self) -> &str {
            "http://localhost:8000"
        }
    }

    fn metrics(full_name: &str) -> RepoMetrics {
        serde_json::from_value(json!({"full_name": full_name})).unwrap()
    }

    #[tokio::test]
    async fn test_repo_lookup_success() {
        let service = StubService {
            repo: Some(metrics("facebook/react")),
            ..StubService::empty()
        };
        let mut session = Session::new(Arc::new(service));

        session.lookup_repo("facebook", "react").await;

        let state = session.state();
        assert_eq!(state.view(), ViewMode::Repo);
        assert_eq!(
            state.repo().unwrap().full_name.as_deref(),
            Some("facebook/react")
        );
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_repo_lookup_failure_surfaces_message() {
        let service = StubService {
            repo_error: Some("Not Found".to_string()),
            ..StubService::empty()
        };
        let mut session = Session::new(Arc::new(service));

        session.lookup_repo("nobody", "nothing").await;

        let state = session.state();
        assert_eq!(state.error(), Some("Not Found"));
        assert!(state.repo().is_none());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_user_lookup_success_derives_repo_list() {
        let profile: UserProfile = serde_json::from_value(json!({
            "user": {"login": "octocat"},
            "repositories": [{"name": "hello"}, {"name": "world"}],
        }))
        .unwrap();
        let service = StubService {
            user: Some(profile),
            ..StubService::empty()
        };
        let mut session = Session::new(Arc::new(service));

        session.search(&Query::User {
            username: "octocat".to_string(),
        })
        .await;

        let state = session.state();
        assert_eq!(state.view(), ViewMode::User);
        assert_eq!(state.user().unwrap().user.login, "octocat");
        assert_eq!(state.user_repos().unwrap().count, 2);
    }

    #[tokio::test]
    async fn test_user_lookup_failure_clears_profile_and_list() {
        let service = StubService {
            user_error: Some("User not found".to_string()),
            ..StubService::empty()
        };
        let mut session = Session::new(Arc::new(service));

        session.lookup_user("ghost").await;

        let state = session.state();
        assert_eq!(state.error(), Some("User not found"));
        assert!(state.user().is_none());
        assert!(state.user_repos().is_none());
    }

    #[tokio::test]
    async fn test_set_view_keeps_fetched_data() {
        let service = StubService {
            repo: Some(metrics("a/b")),
            ..StubService::empty()
        };
        let mut session = Session::new(Arc::new(service));

        session.lookup_repo("a", "b").await;
        session.set_view(ViewMode::User);
        assert_eq!(session.state().view(), ViewMode::User);
        // The repo result survives the tab switch.
        session.set_view(ViewMode::Repo);
        assert!(session.state().repo().is_some());
    }
}
