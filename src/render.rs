//! Plain-text and markdown renditions of a summary, one section per slide.

use num_format::{Locale, ToFormattedString};

use crate::models::{MetricComparison, WrappedSummary};

fn change_label(metric: &MetricComparison) -> String {
    if metric.change >= 0.0 {
        format!("+{:.0}%", metric.change)
    } else {
        format!("{:.0}%", metric.change)
    }
}

fn num(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

pub fn format_text(summary: &WrappedSummary) -> String {
    let mut output = String::new();
    let profile = &summary.profile;

    output.push_str(&format!(
        "\n=== {} Wrapped: {} ===\n\n",
        summary.year, profile.login
    ));

    if let Some(ref name) = profile.name {
        output.push_str(&format!("Name: {}\n", name));
    }
    if let Some(ref bio) = profile.bio {
        output.push_str(&format!("Bio: {}\n", bio));
    }
    output.push_str(&format!(
        "Followers: {}  Following: {}  Public repos: {}\n",
        profile.followers, profile.following, profile.public_repos
    ));

    if !summary.top_languages.is_empty() {
        output.push_str("\nTop Languages:\n");
        for lang in &summary.top_languages {
            output.push_str(&format!(
                "  - {}: {} repos ({:.1}%)\n",
                lang.name, lang.count, lang.percentage
            ));
        }
    }

    output.push_str(&format!("\nTotal stars: {}\n", num(summary.total_stars)));
    output.push_str(&format!(
        "Contributions in {}: {}\n",
        summary.year,
        num(summary.total_commits)
    ));
    output.push_str(&format!("Longest streak: {} days\n", summary.longest_streak));
    output.push_str(&format!(
        "Most productive month: {} ({} contributions)\n",
        summary.most_productive_month.name,
        num(summary.most_productive_month.count)
    ));
    output.push_str(&format!("Universal rank: {}\n", summary.universal_rank));
    output.push_str(&format!(
        "Persona: {} (busiest on {})\n",
        summary.busiest_time, summary.busiest_day
    ));

    let cmp = &summary.previous_year_comparison;
    output.push_str(&format!("\nCompared to {}:\n", summary.year - 1));
    for (label, metric) in [
        ("Commits", &cmp.total_commits),
        ("Stars", &cmp.total_stars),
        ("Longest streak", &cmp.longest_streak),
        ("Public repos", &cmp.public_repos),
    ] {
        output.push_str(&format!(
            "  {}: {} -> {} ({})\n",
            label,
            num(metric.previous),
            num(metric.current),
            change_label(metric)
        ));
    }

    let prediction = &summary.next_year_prediction;
    output.push_str(&format!(
        "\n{} outlook ({} confidence):\n",
        summary.year + 1,
        prediction.confidence
    ));
    output.push_str(&format!(
        "  {} commits, {} stars, {} day streak\n",
        num(prediction.predicted_commits),
        num(prediction.predicted_stars),
        prediction.predicted_streak
    ));
    output.push_str(&format!("  {}\n", prediction.message));

    output
}

pub fn format_markdown(summary: &WrappedSummary) -> String {
    let mut output = String::new();
    let profile = &summary.profile;

    output.push_str(&format!(
        "# {} Wrapped: {}\n\n",
        summary.year, profile.login
    ));

    if let Some(ref name) = profile.name {
        output.push_str(&format!("**Name:** {}\n\n", name));
    }
    if let Some(ref bio) = profile.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }

    output.push_str("## Highlights\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Contributions | {} |\n", num(summary.total_commits)));
    output.push_str(&format!("| Total Stars | {} |\n", num(summary.total_stars)));
    output.push_str(&format!("| Longest Streak | {} days |\n", summary.longest_streak));
    output.push_str(&format!(
        "| Most Productive Month | {} ({}) |\n",
        summary.most_productive_month.name,
        num(summary.most_productive_month.count)
    ));
    output.push_str(&format!("| Universal Rank | {} |\n", summary.universal_rank));
    output.push_str(&format!("| Busiest Day | {} |\n", summary.busiest_day));
    output.push_str(&format!("| Persona | {} |\n", summary.busiest_time));

    if !summary.top_languages.is_empty() {
        output.push_str("\n## Top Languages\n\n");
        output.push_str("| Language | Repos | Share |\n|----------|-------|-------|\n");
        for lang in &summary.top_languages {
            output.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                lang.name, lang.count, lang.percentage
            ));
        }
    }

    let cmp = &summary.previous_year_comparison;
    output.push_str(&format!("\n## Compared to {}\n\n", summary.year - 1));
    output.push_str("| Metric | Previous | Current | Change |\n");
    output.push_str("|--------|----------|---------|--------|\n");
    for (label, metric) in [
        ("Commits", &cmp.total_commits),
        ("Stars", &cmp.total_stars),
        ("Longest Streak", &cmp.longest_streak),
        ("Public Repos", &cmp.public_repos),
    ] {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            label,
            num(metric.previous),
            num(metric.current),
            change_label(metric)
        ));
    }

    let prediction = &summary.next_year_prediction;
    output.push_str(&format!("\n## {} Outlook\n\n", summary.year + 1));
    output.push_str(&format!(
        "- Commits: {}\n- Stars: {}\n- Streak: {} days\n- Confidence: {}\n\n",
        num(prediction.predicted_commits),
        num(prediction.predicted_stars),
        prediction.predicted_streak,
        prediction.confidence
    ));
    output.push_str(&format!("*{}*\n", prediction.message));

    output
}
