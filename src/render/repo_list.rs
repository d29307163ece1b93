use crate::models::RepoList;
use crate::render::format::format_date_short;

/// Renders the user's repository cards.
pub fn render_repo_list(list: &RepoList) -> String {
    let mut output = String::new();

    if list.repos.is_empty() {
        output.push_str("\nRepositories:\n  No repositories found\n");
        return output;
    }

    output.push_str(&format!("\nRepositories ({}):\n", list.count));
    for repo in &list.repos {
        let name = repo
            .name
            .as_deref()
            .or(repo.full_name.as_deref())
            .unwrap_or("(unnamed)");
        match repo.language.as_deref() {
            Some(language) => output.push_str(&format!("\n  {} [{}]\n", name, language)),
            None => output.push_str(&format!("\n  {}\n", name)),
        }
        if let Some(ref description) = repo.description {
            output.push_str(&format!("    {}\n", description));
        }
        // Card stats stay raw, matching the card layout.
        output.push_str(&format!(
            "    ⭐ {}  🍴 {}  📅 {}\n",
            repo.stars.unwrap_or(0),
            repo.forks.unwrap_or(0),
            format_date_short(repo.updated_at)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoSummary;
    use serde_json::json;

    #[test]
    fn test_empty_list() {
        let list = RepoList::from_repos(Vec::new());
        assert!(render_repo_list(&list).contains("No repositories found"));
    }

    #[test]
    fn test_cards_show_raw_counts_and_short_dates() {
        let repos: Vec<RepoSummary> = serde_json::from_value(json!([
            {
                "name": "hello-world",
                "language": "Rust",
                "description": "My first repository",
                "stars": 1234,
                "forks": 5,
                "updated_at": "2024-01-05T08:00:00Z",
            },
            {"name": "spoon-knife"},
        ]))
        .unwrap();
        let list = RepoList::from_repos(repos);

        let view = render_repo_list(&list);
        assert!(view.contains("Repositories (2):"));
        assert!(view.contains("hello-world [Rust]"));
        // No thousands separators on card stats.
        assert!(view.contains("⭐ 1234  🍴 5  📅 Jan 5, 2024"));
        assert!(view.contains("⭐ 0  🍴 0  📅 N/A"));
    }
}
