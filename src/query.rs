/// A classified search input: either a repository lookup or a user lookup.
///
/// Queries are produced only by [`parse_query`] and are consumed by the
/// fetch that they trigger; they carry no state beyond the extracted names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Repo { owner: String, repo: String },
    User { username: String },
}

/// Classifies raw search text into a [`Query`].
///
/// Checked in order, first match wins:
/// 1. A GitHub URL (`github.com/<owner>` or `github.com/<owner>/<repo>`,
///    with or without scheme). The repo segment stops at `/`, whitespace,
///    `?`, or `#`, so trailing slashes and query strings never leak into
///    the repo name.
/// 2. A plain `owner/repo` pair; extra segments after the first two are
///    ignored.
/// 3. Anything else is a username.
///
/// Returns `None` for empty or whitespace-only input. No character-level
/// validation is applied; invalid identifiers are passed through and
/// rejected by the backend.
pub fn parse_query(input: &str) -> Option<Query> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(query) = match_github_url(trimmed) {
        return Some(query);
    }

    if trimmed.contains('/') {
        let parts: Vec<&str> = trimmed
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() >= 2 {
            return Some(Query::Repo {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            });
        }
    }

    Some(Query::User {
        username: trimmed.to_string(),
    })
}

const GITHUB_HOST: &str = "github.com/";

/// Finds the first `github.com/<owner>[/<repo>]` occurrence anywhere in the
/// text. An occurrence with an empty owner segment does not match; later
/// occurrences are still tried.
fn match_github_url(text: &str) -> Option<Query> {
    let mut search_from = 0;
    while let Some(pos) = text[search_from..].find(GITHUB_HOST) {
        let after_host = search_from + pos + GITHUB_HOST.len();
        let rest = &text[after_host..];

        let owner_end = rest.find('/').unwrap_or(rest.len());
        let owner = &rest[..owner_end];
        if owner.is_empty() {
            search_from = after_host;
            continue;
        }

        let repo = rest[owner_end..].strip_prefix('/').and_then(|tail| {
            let end = tail
                .find(|c: char| c == '/' || c == '?' || c == '#' || c.is_whitespace())
                .unwrap_or(tail.len());
            let repo = &tail[..end];
            (!repo.is_empty()).then(|| repo.to_string())
        });

        return Some(match repo {
            Some(repo) => Query::Repo {
                owner: owner.to_string(),
                repo,
            },
            None => Query::User {
                username: owner.to_string(),
            },
        });
    }
    None
}
