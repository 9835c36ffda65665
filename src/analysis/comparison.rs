//! Year-over-year comparison and the naive next-year projection.
//!
//! The star discount, growth floors and message thresholds are product
//! heuristics, not measured values. Keep them as they are unless the product
//! owners ask for a change.

use chrono::Datelike;
use num_format::{Locale, ToFormattedString};

use crate::models::{Confidence, MetricComparison, Prediction, Repository, YearComparison};

/// Share of today's stars assumed to have existed a year earlier.
pub const PRIOR_YEAR_STAR_DISCOUNT: f64 = 0.7;

/// Growth assumed for commits and stars when there is no prior-year baseline.
pub const DEFAULT_GROWTH_RATE: f64 = 0.1;

/// Minimum growth applied when projecting commits and stars.
pub const MIN_PROJECTED_GROWTH: f64 = 0.05;

/// Inputs for one metric in both years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTotals {
    pub commits: u64,
    pub stars: u64,
    pub streak: u32,
    pub repos: u32,
}

/// Percentage change; a zero baseline reports 100 for any growth and 0 otherwise.
pub fn percent_change(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return if current > 0 { 100.0 } else { 0.0 };
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

pub fn compare(current: u64, previous: u64) -> MetricComparison {
    MetricComparison {
        current,
        previous,
        change: percent_change(current, previous),
    }
}

/// Repositories that already existed in `year`. Repositories without a
/// creation date are left out.
pub fn repos_created_by(repos: &[Repository], year: i32) -> Vec<&Repository> {
    repos
        .iter()
        .filter(|r| r.created_at.map(|c| c.year() <= year).unwrap_or(false))
        .collect()
}

/// Star total estimated for `year` from today's counts of repositories that
/// existed back then.
pub fn estimate_prior_year_stars(repos: &[Repository], year: i32) -> u64 {
    let stars: u64 = repos_created_by(repos, year).iter().map(|r| r.stars()).sum();
    (stars as f64 * PRIOR_YEAR_STAR_DISCOUNT).round().max(0.0) as u64
}

pub fn year_comparison(current: YearTotals, previous: YearTotals) -> YearComparison {
    YearComparison {
        total_commits: compare(current.commits, previous.commits),
        total_stars: compare(current.stars, previous.stars),
        longest_streak: compare(current.streak as u64, previous.streak as u64),
        public_repos: compare(current.repos as u64, previous.repos as u64),
    }
}

fn growth_rate(current: u64, previous: u64, default: f64) -> f64 {
    if previous > 0 {
        (current as f64 - previous as f64) / previous as f64
    } else {
        default
    }
}

fn project(current: u64, rate: f64, floor: f64) -> u64 {
    (current as f64 * (1.0 + rate.max(floor))).round().max(0.0) as u64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRates {
    pub commits: f64,
    pub stars: f64,
    pub streak: f64,
}

impl GrowthRates {
    pub fn between(current: YearTotals, previous: YearTotals) -> Self {
        Self {
            commits: growth_rate(current.commits, previous.commits, DEFAULT_GROWTH_RATE),
            stars: growth_rate(current.stars, previous.stars, DEFAULT_GROWTH_RATE),
            streak: growth_rate(current.streak as u64, previous.streak as u64, 0.0),
        }
    }
}

pub fn confidence(previous_commits: u64, previous_stars: u64) -> Confidence {
    match (previous_commits > 0, previous_stars > 0) {
        (true, true) => Confidence::High,
        (false, false) => Confidence::Low,
        _ => Confidence::Medium,
    }
}

/// Index into the message templates, first matching rule wins.
pub fn message_index(rates: &GrowthRates, total_commits: u64, longest_streak: u32) -> usize {
    if rates.commits > 0.3 {
        0
    } else if rates.streak > 0.15 {
        1
    } else if rates.stars > 0.3 {
        2
    } else if rates.commits > 0.2 {
        3
    } else if rates.commits > 0.1 {
        4
    } else if total_commits > 500 {
        5
    } else if longest_streak > 50 {
        8
    } else if rates.commits > 0.0 {
        6
    } else {
        7
    }
}

pub fn motivational_message(index: usize, commits: u64, stars: u64, streak: u64) -> String {
    let commits = commits.to_formatted_string(&Locale::en);
    let stars = stars.to_formatted_string(&Locale::en);
    match index {
        0 => format!("Keep pushing! You're on track for {} commits next year!", commits),
        1 => format!("Your coding journey is accelerating! Aim for {} day streak!", streak),
        2 => format!("The stars are aligning! You could reach {} stars!", stars),
        3 => "Your momentum is unstoppable! Keep coding and watch your numbers soar!".to_string(),
        4 => "Next year will be even better! Challenge yourself to beat these predictions!"
            .to_string(),
        5 => format!("You're building something amazing! {} commits is within reach!", commits),
        6 => "Every commit counts! You're on fire - keep it up!".to_string(),
        7 => "The future is bright! Your dedication will pay off!".to_string(),
        8 => format!("Stay consistent! {} days is just the beginning!", streak),
        _ => "Your code is making an impact! Keep pushing forward!".to_string(),
    }
}

pub fn predict_next_year(current: YearTotals, previous: YearTotals) -> Prediction {
    let rates = GrowthRates::between(current, previous);

    let predicted_commits = project(current.commits, rates.commits, MIN_PROJECTED_GROWTH);
    let predicted_stars = project(current.stars, rates.stars, MIN_PROJECTED_GROWTH);
    let predicted_streak = project(current.streak as u64, rates.streak, 0.0);

    let index = message_index(&rates, current.commits, current.streak);

    Prediction {
        predicted_commits,
        predicted_stars,
        predicted_streak,
        message: motivational_message(index, predicted_commits, predicted_stars, predicted_streak),
        confidence: confidence(previous.commits, previous.stars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::languages::tests::repo;
    use chrono::{TimeZone, Utc};

    fn totals(commits: u64, stars: u64, streak: u32) -> YearTotals {
        YearTotals {
            commits,
            stars,
            streak,
            repos: 0,
        }
    }

    fn created(mut r: Repository, year: i32) -> Repository {
        r.created_at = Some(Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap());
        r
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(10, 0), 100.0);
        assert_eq!(percent_change(0, 0), 0.0);
        assert_eq!(percent_change(150, 200), -25.0);
        assert_eq!(percent_change(300, 200), 50.0);
    }

    #[test]
    fn test_prior_year_star_estimate() {
        let year = 2024;
        let repos = vec![
            created(repo("old", Some("Rust"), Some(100)), year - 2),
            created(repo("new", Some("Rust"), Some(50)), year),
            repo("undated", None, Some(1000)),
        ];
        assert_eq!(estimate_prior_year_stars(&repos, year - 1), 70);
        assert_eq!(repos_created_by(&repos, year - 1).len(), 1);
    }

    #[test]
    fn test_star_estimate_rounds_to_nearest() {
        let repos = vec![created(repo("a", None, Some(5)), 2020)];
        // 5 * 0.7 = 3.5
        assert_eq!(estimate_prior_year_stars(&repos, 2021), 4);
        assert_eq!(estimate_prior_year_stars(&[], 2021), 0);
    }

    #[test]
    fn test_growth_defaults_without_baseline() {
        let rates = GrowthRates::between(totals(100, 10, 5), totals(0, 0, 0));
        assert_eq!(rates.commits, DEFAULT_GROWTH_RATE);
        assert_eq!(rates.stars, DEFAULT_GROWTH_RATE);
        assert_eq!(rates.streak, 0.0);
    }

    #[test]
    fn test_prediction_floors_growth() {
        // commits shrank by half, stars grew 20%, streak shrank
        let prediction = predict_next_year(totals(100, 120, 10), totals(200, 100, 20));
        assert_eq!(prediction.predicted_commits, 105);
        assert_eq!(prediction.predicted_stars, 144);
        assert_eq!(prediction.predicted_streak, 10);
        assert_eq!(prediction.confidence, Confidence::High);
        assert_eq!(
            prediction.message,
            "The future is bright! Your dedication will pay off!"
        );
    }

    #[test]
    fn test_prediction_message_interpolates_with_separators() {
        let prediction = predict_next_year(totals(2000, 0, 3), totals(1000, 0, 3));
        assert_eq!(prediction.predicted_commits, 4000);
        assert_eq!(
            prediction.message,
            "Keep pushing! You're on track for 4,000 commits next year!"
        );
        assert_eq!(prediction.confidence, Confidence::Medium);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(confidence(1, 1), Confidence::High);
        assert_eq!(confidence(0, 1), Confidence::Medium);
        assert_eq!(confidence(1, 0), Confidence::Medium);
        assert_eq!(confidence(0, 0), Confidence::Low);
    }

    #[test]
    fn test_message_priority_cascade() {
        let rates = |commits, stars, streak| GrowthRates {
            commits,
            stars,
            streak,
        };
        assert_eq!(message_index(&rates(0.31, 0.0, 0.5), 0, 0), 0);
        assert_eq!(message_index(&rates(0.3, 0.0, 0.16), 0, 0), 1);
        assert_eq!(message_index(&rates(0.0, 0.31, 0.15), 0, 0), 2);
        assert_eq!(message_index(&rates(0.25, 0.3, 0.0), 0, 0), 3);
        assert_eq!(message_index(&rates(0.15, 0.0, 0.0), 0, 0), 4);
        assert_eq!(message_index(&rates(0.1, 0.0, 0.0), 501, 60), 5);
        assert_eq!(message_index(&rates(0.1, 0.0, 0.0), 500, 51), 8);
        assert_eq!(message_index(&rates(0.05, 0.0, 0.0), 500, 50), 6);
        assert_eq!(message_index(&rates(0.0, 0.0, 0.0), 0, 0), 7);
        assert_eq!(message_index(&rates(-0.5, 0.0, 0.0), 0, 0), 7);
    }

    #[test]
    fn test_comparison_block() {
        let current = YearTotals {
            commits: 150,
            stars: 10,
            streak: 4,
            repos: 12,
        };
        let previous = YearTotals {
            commits: 200,
            stars: 0,
            streak: 4,
            repos: 6,
        };
        let cmp = year_comparison(current, previous);
        assert_eq!(cmp.total_commits.change, -25.0);
        assert_eq!(cmp.total_stars.change, 100.0);
        assert_eq!(cmp.longest_streak.change, 0.0);
        assert_eq!(cmp.public_repos.change, 100.0);
        assert_eq!(cmp.public_repos.previous, 6);
    }
}
