use std::sync::Arc;

use crate::analysis::deriver::{DeriveInput, StatsDeriver};
use crate::analysis::year::current_wrapped_year;
use crate::error::{Error, Result};
use crate::models::{validate_username, WrappedSummary};
use crate::sources::{ContributionSource, ProfileSource};

/// Fetches everything one summary needs and runs the deriver over it.
#[derive(Clone)]
pub struct WrappedPipeline {
    profiles: Arc<dyn ProfileSource>,
    contributions: Arc<dyn ContributionSource>,
    deriver: StatsDeriver,
}

impl WrappedPipeline {
    pub fn new(
        profiles: impl ProfileSource + 'static,
        contributions: impl ContributionSource + 'static,
        deriver: StatsDeriver,
    ) -> Self {
        Self {
            profiles: Arc::new(profiles),
            contributions: Arc::new(contributions),
            deriver,
        }
    }

    /// Summary for the year resolved from today's date.
    pub async fn wrapped(&self, username: &str, token: Option<&str>) -> Result<WrappedSummary> {
        self.wrapped_for_year(username, token, current_wrapped_year())
            .await
    }

    pub async fn wrapped_for_year(
        &self,
        username: &str,
        token: Option<&str>,
        year: i32,
    ) -> Result<WrappedSummary> {
        validate_username(username)?;
        tracing::info!("Building {} summary for: {}", year, username);

        // The profile lookup decides whether the account exists, so its error
        // wins over whatever the listings report.
        let profile_side = async {
            let profile = self.profiles.get_profile(username).await?;
            let (repos, events) = futures::try_join!(
                self.profiles.list_repositories(username, token),
                self.profiles.list_public_events(username),
            )?;
            Ok::<_, Error>((profile, repos, events))
        };

        let (profile_side, current, previous) = tokio::join!(
            profile_side,
            self.contributions.get_contributions(username, year),
            self.contributions.get_contributions(username, year - 1),
        );
        let (profile, repos, events) = profile_side?;

        tracing::info!(
            "Fetched {} repositories, {} events, {} contributions in {}",
            repos.len(),
            events.len(),
            current.total,
            year
        );

        let input = DeriveInput {
            profile,
            repos,
            events,
            year,
            current,
            previous,
        };

        Ok(self.deriver.derive(&input))
    }
}
