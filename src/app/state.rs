use crate::models::{RepoList, RepoMetrics, UserProfile};

/// Which of the two top-level displays is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Repo,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Repo,
    User,
}

/// Handed out by [`ViewState::begin`]; a settle presenting a token older
/// than the latest `begin` is stale and discarded.
#[derive(Debug, Clone, Copy)]
pub struct RequestToken {
    generation: u64,
}

#[derive(Debug)]
pub enum LookupOutcome {
    RepoLoaded(RepoMetrics),
    RepoFailed(String),
    UserLoaded(UserProfile),
    UserFailed(String),
}

/// The whole UI state, owned by the orchestrator.
///
/// `begin` and `settle` are the only mutations a lookup performs, one
/// transition per outcome. The generation counter keeps a slow response
/// from clobbering the result of a newer search.
#[derive(Debug, Default)]
pub struct ViewState {
    view: ViewMode,
    repo: Option<RepoMetrics>,
    user: Option<UserProfile>,
    user_repos: Option<RepoList>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn repo(&self) -> Option<&RepoMetrics> {
        self.repo.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn user_repos(&self) -> Option<&RepoList> {
        self.user_repos.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a lookup: clears the error and the results for that mode,
    /// raises the loading flag, and issues a fresh token.
    pub fn begin(&mut self, kind: LookupKind) -> RequestToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        match kind {
            LookupKind::Repo => self.repo = None,
            LookupKind::User => {
                self.user = None;
                self.user_repos = None;
            }
        }
        RequestToken {
            generation: self.generation,
        }
    }

    /// Applies a finished lookup's outcome. Returns `false` without
    /// touching state when the token is stale.
    pub fn settle(&mut self, token: RequestToken, outcome: LookupOutcome) -> bool {
        if token.generation != self.generation {
            tracing::debug!("Discarding stale lookup outcome: {:?}", outcome);
            return false;
        }

        match outcome {
            LookupOutcome::RepoLoaded(metrics) => {
                self.repo = Some(metrics);
                self.view = ViewMode::Repo;
            }
            LookupOutcome::RepoFailed(message) => {
                self.error = Some(message);
            }
            LookupOutcome::UserLoaded(profile) => {
                self.user_repos = profile
                    .repositories
                    .clone()
                    .map(RepoList::from_repos);
                self.user = Some(profile);
                self.view = ViewMode::User;
            }
            LookupOutcome::UserFailed(message) => {
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }
}
