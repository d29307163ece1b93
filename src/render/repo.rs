use crate::models::RepoMetrics;
use crate::render::format::{format_count, format_date_long, format_kb};

/// Renders the repository metrics view.
pub fn render_repo(data: &RepoMetrics) -> String {
    let mut output = String::new();

    let title = data
        .full_name
        .as_deref()
        .or(data.name.as_deref())
        .unwrap_or("Repository");
    output.push_str(&format!("\n=== {} ===\n", title));
    if let Some(ref url) = data.url {
        output.push_str(&format!("{}\n", url));
    }
    if let Some(ref description) = data.description {
        output.push_str(&format!("\n{}\n", description));
    }

    output.push_str("\nMetrics:\n");
    output.push_str(&format!("  ⭐ Stars:         {}\n", format_count(data.stars)));
    output.push_str(&format!("  🍴 Forks:         {}\n", format_count(data.forks)));
    output.push_str(&format!("  👀 Watchers:      {}\n", format_count(data.watchers)));
    output.push_str(&format!(
        "  👥 Contributors:  {}\n",
        format_count(data.contributors_count)
    ));
    output.push_str(&format!(
        "  🐛 Open Issues:   {}\n",
        format_count(data.open_issues)
    ));
    output.push_str(&format!(
        "  📦 Releases:      {}\n",
        format_count(data.total_releases)
    ));

    output.push_str("\nRepository Information:\n");
    output.push_str(&format!(
        "  Primary Language: {}\n",
        data.language.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!(
        "  License: {}\n",
        data.license.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!("  Created: {}\n", format_date_long(data.created_at)));
    output.push_str(&format!(
        "  Last Updated: {}\n",
        format_date_long(data.updated_at)
    ));
    output.push_str(&format!(
        "  Last Pushed: {}\n",
        format_date_long(data.pushed_at)
    ));
    // Only shown when the backend computed a nonzero total.
    if let Some(commits) = data.total_commits_52_weeks.filter(|c| *c > 0) {
        output.push_str(&format!(
            "  Commits (52 weeks): {}\n",
            format_count(Some(commits))
        ));
    }

    let languages = data.languages_by_bytes();
    if !languages.is_empty() {
        output.push_str("\nLanguages:\n");
        for (language, bytes) in languages {
            output.push_str(&format!("  {:<16} {}\n", language, format_kb(bytes)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_metrics_and_dates() {
        let data: RepoMetrics = serde_json::from_value(json!({
            "full_name": "facebook/react",
            "url": "https://github.com/facebook/react",
            "description": "A library for building user interfaces",
            "stars": 220000,
            "forks": 45000,
            "language": "JavaScript",
            "created_at": "2013-05-24T16:15:54Z",
        }))
        .unwrap();

        let view = render_repo(&data);
        assert!(view.contains("=== facebook/react ==="));
        assert!(view.contains("Stars:         220,000"));
        assert!(view.contains("Forks:         45,000"));
        // Missing metrics fall back to N/A.
        assert!(view.contains("Watchers:      N/A"));
        assert!(view.contains("License: N/A"));
        assert!(view.contains("Created: May 24, 2013"));
        assert!(view.contains("Last Updated: N/A"));
    }

    #[test]
    fn test_languages_sorted_descending_in_kb() {
        let data: RepoMetrics = serde_json::from_value(json!({
            "name": "react",
            "languages": {"HTML": 120000, "JavaScript": 4000000, "CSS": 120000},
        }))
        .unwrap();

        let view = render_repo(&data);
        let js = view.find("JavaScript").unwrap();
        let css = view.find("CSS").unwrap();
        let html = view.find("HTML").unwrap();
        assert!(js < css, "largest language listed first");
        // Equal byte counts tie-break alphabetically.
        assert!(css < html);
        assert!(view.contains("3906.25 KB"));
    }

    #[test]
    fn test_commit_row_hidden_when_absent_or_zero() {
        let data: RepoMetrics = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert!(!render_repo(&data).contains("Commits (52 weeks)"));

        let data: RepoMetrics =
            serde_json::from_value(json!({"name": "x", "total_commits_52_weeks": 0})).unwrap();
        assert!(!render_repo(&data).contains("Commits (52 weeks)"));

        let data: RepoMetrics =
            serde_json::from_value(json!({"name": "x", "total_commits_52_weeks": 1234})).unwrap();
        assert!(render_repo(&data).contains("Commits (52 weeks): 1,234"));
    }
}
