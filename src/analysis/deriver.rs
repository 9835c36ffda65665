use chrono::{FixedOffset, Offset, Utc};

use crate::analysis::activity::{busiest_day, busiest_time};
use crate::analysis::comparison::{
    estimate_prior_year_stars, predict_next_year, repos_created_by, year_comparison, YearTotals,
};
use crate::analysis::languages::{top_languages, total_stars};
use crate::analysis::months::most_productive_month;
use crate::analysis::rank::universal_rank;
use crate::analysis::streak::longest_streak;
use crate::models::{ContributionYear, Event, GitHubUser, PublicRepo, Repository, WrappedSummary};

/// Everything fetched for one summary.
#[derive(Debug, Clone)]
pub struct DeriveInput {
    pub profile: GitHubUser,
    pub repos: Vec<Repository>,
    pub events: Vec<Event>,
    pub year: i32,
    pub current: ContributionYear,
    pub previous: ContributionYear,
}

/// Computes a [`WrappedSummary`] from already-fetched data. No I/O.
#[derive(Debug, Clone, Copy)]
pub struct StatsDeriver {
    offset: FixedOffset,
}

impl Default for StatsDeriver {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl StatsDeriver {
    /// `offset` is the local time used for push-event hour and weekday buckets.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn derive(&self, input: &DeriveInput) -> WrappedSummary {
        let previous_year = input.year - 1;

        let stars = total_stars(&input.repos);
        let total_commits = input.current.total;
        let streak = longest_streak(&input.current.days);

        let current = YearTotals {
            commits: total_commits,
            stars,
            streak,
            repos: input.profile.public_repos,
        };
        let previous = YearTotals {
            commits: input.previous.total,
            stars: estimate_prior_year_stars(&input.repos, previous_year),
            streak: longest_streak(&input.previous.days),
            repos: repos_created_by(&input.repos, previous_year).len() as u32,
        };

        tracing::debug!(
            "Derived {} for {}: {} commits, {} stars, {} day streak",
            input.year,
            input.profile.login,
            total_commits,
            stars,
            streak
        );

        WrappedSummary {
            profile: input.profile.clone(),
            repos: input.repos.iter().map(PublicRepo::from).collect(),
            top_languages: top_languages(&input.repos),
            total_stars: stars,
            total_commits,
            longest_streak: streak,
            most_productive_month: most_productive_month(&input.current.days),
            universal_rank: universal_rank(total_commits),
            busiest_day: busiest_day(&input.events, self.offset).to_string(),
            busiest_time: busiest_time(&input.events, self.offset),
            year: input.year,
            previous_year_comparison: year_comparison(current, previous),
            next_year_prediction: predict_next_year(current, previous),
        }
    }
}
