use crate::models::ContributorRanking;
use crate::render::format::format_count_or_zero;

/// Renders the ranked contributor table.
pub fn render_ranking(data: &ContributorRanking) -> String {
    let mut output = String::new();

    output.push_str("\nContributor Ranking:\n");
    if data.contributors.is_empty() {
        output.push_str("  No contributors found\n");
        return output;
    }

    output.push_str(&format!(
        "  {} contributors for {}/{}\n\n",
        data.total_contributors, data.owner, data.repo
    ));

    output.push_str(&format!(
        "  {:<6} {:<20} {:>8} {:>6} {:>7} {:>8}\n",
        "Rank", "Contributor", "Commits", "PRs", "Issues", "Total"
    ));
    for row in &data.contributors {
        output.push_str(&format!(
            "  {:<6} {:<20} {:>8} {:>6} {:>7} {:>8}\n",
            rank_badge(row.rank),
            row.username,
            format_count_or_zero(row.commits),
            format_count_or_zero(row.prs),
            format_count_or_zero(row.issues),
            format_count_or_zero(row.total_contributions),
        ));
    }

    output
}

/// Medal glyphs for the podium, "#N" for everyone else.
fn rank_badge(rank: u64) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}
