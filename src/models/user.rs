use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::repo::RepoSummary;

/// The core account record shared by both profile wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

/// One day of the 30-day activity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub total_contributions: u64,
    #[serde(default)]
    pub contributions_by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub last_30_days: Vec<DayActivity>,
}

/// Aggregate totals the backend precomputes for the profile header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTotals {
    pub total_repos: Option<u64>,
    pub total_stars: Option<u64>,
    pub total_forks: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub total_contributions: Option<u64>,
    pub achievements_count: Option<u64>,
}

/// A normalized user profile.
///
/// The endpoint has served two shapes over time: the comprehensive
/// `{ user, repositories, activity, achievements, summary }` object and a
/// legacy bare account record. [`ProfilePayload`] accepts either and
/// [`UserProfile::from`] normalizes them once at the fetch boundary, so
/// everything downstream sees one explicit optional field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: UserAccount,
    pub repositories: Option<Vec<RepoSummary>>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub activity: Option<ActivitySummary>,
    pub summary: Option<ProfileTotals>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfilePayload {
    Comprehensive {
        user: UserAccount,
        repositories: Option<Vec<RepoSummary>>,
        #[serde(default)]
        achievements: Vec<Achievement>,
        activity: Option<ActivitySummary>,
        summary: Option<ProfileTotals>,
    },
    Legacy(UserAccount),
}

impl From<ProfilePayload> for UserProfile {
    fn from(payload: ProfilePayload) -> Self {
        match payload {
            ProfilePayload::Comprehensive {
                user,
                repositories,
                achievements,
                activity,
                summary,
            } => Self {
                user,
                repositories,
                achievements,
                activity,
                summary,
            },
            ProfilePayload::Legacy(user) => Self {
                user,
                repositories: None,
                achievements: Vec::new(),
                activity: None,
                summary: None,
            },
        }
    }
}

impl UserProfile {
    // Display stats prefer the precomputed summary and fall back to the
    // account record, defaulting to zero.

    pub fn repo_count(&self) -> u64 {
        self.summary
            .as_ref()
            .and_then(|s| s.total_repos)
            .or(self.user.public_repos)
            .unwrap_or(0)
    }

    pub fn followers(&self) -> u64 {
        self.summary
            .as_ref()
            .and_then(|s| s.followers)
            .or(self.user.followers)
            .unwrap_or(0)
    }

    pub fn following(&self) -> u64 {
        self.summary
            .as_ref()
            .and_then(|s| s.following)
            .or(self.user.following)
            .unwrap_or(0)
    }

    pub fn total_stars(&self) -> Option<u64> {
        self.summary.as_ref().and_then(|s| s.total_stars)
    }

    pub fn total_contributions(&self) -> Option<u64> {
        self.summary.as_ref().and_then(|s| s.total_contributions)
    }

    /// Display name: the real name when set, the login otherwise.
    pub fn display_name(&self) -> &str {
        self.user.name.as_deref().unwrap_or(&self.user.login)
    }
}
