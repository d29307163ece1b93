use serde::{Deserialize, Serialize};

/// Ranked contributors for one repository.
///
/// The backend does not currently expose an endpoint for this shape; it is
/// rendered from data supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorRanking {
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub total_contributors: u64,
    #[serde(default)]
    pub contributors: Vec<ContributorRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorRow {
    pub rank: u64,
    pub username: String,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
    pub commits: Option<u64>,
    pub prs: Option<u64>,
    pub issues: Option<u64>,
    /// Precomputed by the data source; never recomputed from the columns.
    pub total_contributions: Option<u64>,
}
