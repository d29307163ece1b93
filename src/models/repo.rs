use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Repository metrics as returned by `GET /api/repo/{owner}/{repo}`.
///
/// Every field the backend may omit is optional; renderers substitute
/// "N/A" for missing values. Unknown wire fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoMetrics {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub watchers: Option<u64>,
    pub open_issues: Option<u64>,
    pub language: Option<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub license: Option<String>,
    pub contributors_count: Option<u64>,
    pub total_releases: Option<u64>,
    pub total_commits_52_weeks: Option<u64>,
}

impl RepoMetrics {
    /// Language byte counts sorted descending by size, ties ordered
    /// alphabetically so the listing is deterministic.
    pub fn languages_by_bytes(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .languages
            .iter()
            .map(|(lang, bytes)| (lang.as_str(), *bytes))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// A single repository card inside a user profile's `repositories` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub updated_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

/// The repository list derived from a user profile: the summaries plus
/// their count. Replaced wholesale on every user lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoList {
    pub repos: Vec<RepoSummary>,
    pub count: usize,
}

impl RepoList {
    pub fn from_repos(repos: Vec<RepoSummary>) -> Self {
        let count = repos.len();
        Self { repos, count }
    }
}
