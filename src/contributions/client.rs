use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{validate_username, ContributionResponse, ContributionYear};
use crate::sources::ContributionSource;

/// Client for the third-party contribution-calendar API.
///
/// The yearly total it reports is the source of truth for commit counts;
/// GitHub's own event feed is capped and cannot reconstruct a full year.
#[derive(Clone)]
pub struct ContributionClient {
    client: Client,
    base_url: String,
}

impl ContributionClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(
            &config.contributions_api_url,
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("gitwrapped/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_year(&self, username: &str, year: i32) -> Result<ContributionYear> {
        validate_username(username)?;
        let url = format!("{}/{}?y={}", self.base_url, username, year);
        tracing::debug!("Fetching contributions: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::ContributionApi(format!(
                "calendar unavailable for {} in {}: {}",
                username,
                year,
                response.status()
            )));
        }

        let body: ContributionResponse = response.json().await?;
        Ok(body.into_year(year))
    }
}

#[async_trait]
impl ContributionSource for ContributionClient {
    async fn get_contributions(&self, username: &str, year: i32) -> ContributionYear {
        match self.fetch_year(username, year).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to fetch contributions for {} in {}: {}", username, year, e);
                ContributionYear::empty()
            }
        }
    }
}
