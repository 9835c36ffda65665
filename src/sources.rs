use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ContributionYear, Event, GitHubUser, Repository};

/// Profile, repository and event data for a GitHub account.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn get_profile(&self, username: &str) -> Result<GitHubUser>;

    /// Most recently updated repositories first, at most 100.
    async fn list_repositories(&self, username: &str, token: Option<&str>)
        -> Result<Vec<Repository>>;

    /// Most recent public events first, at most 100.
    async fn list_public_events(&self, username: &str) -> Result<Vec<Event>>;
}

/// Yearly contribution calendar for a GitHub account.
///
/// Implementations never fail: transport or upstream problems yield
/// [`ContributionYear::empty`].
#[async_trait]
pub trait ContributionSource: Send + Sync {
    async fn get_contributions(&self, username: &str, year: i32) -> ContributionYear;
}
