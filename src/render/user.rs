use crate::models::{ActivitySummary, UserProfile};
use crate::render::format::{format_count_or_zero, format_date_long, group_thousands, Intensity};

const LEGEND: [Intensity; 5] = [
    Intensity::None,
    Intensity::Low,
    Intensity::Medium,
    Intensity::High,
    Intensity::VeryHigh,
];

/// Renders the user profile view: header, stats, achievements, 30-day
/// activity, and account metadata.
pub fn render_user(profile: &UserProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== {} ===\n", profile.display_name()));
    output.push_str(&format!("@{}\n", profile.user.login));
    if let Some(ref url) = profile.user.html_url {
        output.push_str(&format!("{}\n", url));
    }
    if let Some(ref bio) = profile.user.bio {
        output.push_str(&format!("\n{}\n", bio));
    }

    output.push_str("\nStats:\n");
    output.push_str(&format!(
        "  Public Repos: {}\n",
        group_thousands(profile.repo_count())
    ));
    output.push_str(&format!(
        "  Followers: {}\n",
        group_thousands(profile.followers())
    ));
    output.push_str(&format!(
        "  Following: {}\n",
        group_thousands(profile.following())
    ));
    if let Some(stars) = profile.total_stars() {
        output.push_str(&format!("  Total Stars: {}\n", group_thousands(stars)));
    }
    if let Some(contributions) = profile.total_contributions() {
        output.push_str(&format!(
            "  Contributions: {}\n",
            group_thousands(contributions)
        ));
    }

    if !profile.achievements.is_empty() {
        output.push_str(&format!(
            "\nAchievements ({}):\n",
            profile.achievements.len()
        ));
        for achievement in &profile.achievements {
            let icon = achievement.icon.as_deref().unwrap_or("•");
            match achievement.description.as_deref() {
                Some(description) => output.push_str(&format!(
                    "  {} {} — {}\n",
                    icon, achievement.name, description
                )),
                None => output.push_str(&format!("  {} {}\n", icon, achievement.name)),
            }
        }
    }

    if let Some(ref activity) = profile.activity {
        if !activity.last_30_days.is_empty() {
            render_activity(&mut output, activity);
        }
    }

    output.push('\n');
    if let Some(ref company) = profile.user.company {
        output.push_str(&format!("🏢 {}\n", company));
    }
    if let Some(ref location) = profile.user.location {
        output.push_str(&format!("📍 {}\n", location));
    }
    if let Some(ref blog) = profile.user.blog {
        output.push_str(&format!("🔗 {}\n", blog));
    }
    output.push_str(&format!(
        "📅 Joined {}\n",
        format_date_long(profile.user.created_at)
    ));
    if let Some(ref twitter) = profile.user.twitter_username {
        output.push_str(&format!("🐦 @{}\n", twitter));
    }

    output
}

fn render_activity(output: &mut String, activity: &ActivitySummary) {
    output.push_str("\nContribution Activity (Last 30 Days):\n");
    output.push_str(&format!(
        "  Total Events: {}\n",
        format_count_or_zero(Some(activity.total_events))
    ));
    output.push_str(&format!(
        "  Total Contributions: {}\n",
        format_count_or_zero(Some(activity.total_contributions))
    ));

    let typed: Vec<(&String, &u64)> = activity
        .contributions_by_type
        .iter()
        .filter(|(_, count)| **count > 0)
        .collect();
    if !typed.is_empty() {
        output.push_str("\n  Contributions by Type:\n");
        for (event_type, count) in typed {
            let name = event_type.trim_end_matches("Event");
            output.push_str(&format!(
                "    {}: {}\n",
                name,
                format_count_or_zero(Some(*count))
            ));
        }
    }

    output.push_str("\n  Daily Activity:\n    ");
    for day in &activity.last_30_days {
        output.push(Intensity::for_count(day.count).glyph());
    }
    output.push_str("\n    ");
    let legend: Vec<String> = LEGEND
        .iter()
        .map(|tier| format!("{} {}", tier.glyph(), tier.label()))
        .collect();
    output.push_str(&legend.join("  "));
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(body: serde_json::Value) -> UserProfile {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_header_and_stats() {
        let profile = profile(json!({
            "user": {"login": "octocat", "name": "The Octocat", "followers": 4321},
            "summary": {"total_repos": 8, "total_stars": 1500},
        }));

        let view = render_user(&profile);
        assert!(view.contains("=== The Octocat ==="));
        assert!(view.contains("@octocat"));
        assert!(view.contains("Public Repos: 8"));
        assert!(view.contains("Followers: 4,321"));
        assert!(view.contains("Total Stars: 1,500"));
        assert!(view.contains("Joined N/A"));
    }

    #[test]
    fn test_optional_sections_absent_for_legacy_profile() {
        let profile = profile(json!({"user": {"login": "octocat"}}));
        let view = render_user(&profile);
        assert!(!view.contains("Achievements"));
        assert!(!view.contains("Contribution Activity"));
        assert!(!view.contains("Total Stars"));
        assert!(view.contains("Followers: 0"));
    }

    #[test]
    fn test_activity_calendar_glyphs() {
        let profile = profile(json!({
            "user": {"login": "octocat"},
            "activity": {
                "total_events": 5,
                "total_contributions": 18,
                "contributions_by_type": {"PushEvent": 18, "IssuesEvent": 0},
                "last_30_days": [
                    {"date": "2024-01-01", "count": 0},
                    {"date": "2024-01-02", "count": 2},
                    {"date": "2024-01-03", "count": 5},
                    {"date": "2024-01-04", "count": 10},
                    {"date": "2024-01-05", "count": 11},
                ],
            },
        }));

        let view = render_user(&profile);
        assert!(view.contains("·░▒▓█"));
        // Zero-count event types are dropped, the Event suffix is trimmed.
        assert!(view.contains("Push: 18"));
        assert!(!view.contains("Issues:"));
        assert!(view.contains("█ Very High"));
    }
}
