use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::rate_limiter::{rate_limit_error, RateLimiter};
use crate::models::{validate_username, Event, GitHubUser, Repository};
use crate::sources::ProfileSource;

/// GitHub caps both listings at a single page of 100.
const LIST_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    has_default_token: bool,
}

impl GitHubClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(
            config.github_token.as_deref(),
            &config.github_api_url,
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn with_base_url(token: Option<&str>, base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitwrapped/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            has_default_token: token.is_some(),
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        validate_username(username)?;
        self.rate_limiter.check().await?;
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        self.rate_limiter.update_from_response(&response).await;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        let response = check_status(response, &url).await?;
        Ok(response.json().await?)
    }

    pub async fn get_user_repos(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<Vec<Repository>> {
        validate_username(username)?;
        // Authenticated callers see every repository they can access.
        let authenticated = token.is_some() || self.has_default_token;
        let repo_type = if authenticated { "all" } else { "owner" };
        let url = format!(
            "{}/users/{}/repos?type={}&sort=updated",
            self.base_url, username, repo_type
        );
        tracing::info!("Fetching repositories for: {}", username);

        Paginator::new(&self.client, &self.rate_limiter)
            .with_token(token)
            .fetch_limited(&url, LIST_LIMIT, LIST_LIMIT)
            .await
            .map_err(|e| missing_user(e, username))
    }

    pub async fn get_public_events(&self, username: &str) -> Result<Vec<Event>> {
        validate_username(username)?;
        let url = format!("{}/users/{}/events/public", self.base_url, username);
        tracing::info!("Fetching public events for: {}", username);

        Paginator::new(&self.client, &self.rate_limiter)
            .fetch_limited(&url, LIST_LIMIT, LIST_LIMIT)
            .await
            .map_err(|e| missing_user(e, username))
    }
}

/// A 404 from a per-user listing means the account does not exist.
fn missing_user(err: Error, username: &str) -> Error {
    match err {
        Error::GitHubApi { status: 404, .. } => Error::UserNotFound(username.to_string()),
        other => other,
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn get_profile(&self, username: &str) -> Result<GitHubUser> {
        self.get_user(username).await
    }

    async fn list_repositories(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<Vec<Repository>> {
        self.get_user_repos(username, token).await
    }

    async fn list_public_events(&self, username: &str) -> Result<Vec<Event>> {
        self.get_public_events(username).await
    }
}

/// Passes successful responses through and turns the rest into errors.
pub(crate) async fn check_status(response: Response, url: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    if let Some(err) = rate_limit_error(&response) {
        return Err(err);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::GitHubApi {
        status: status.as_u16(),
        message: format!("Request to {} failed: {} - {}", url, status, upstream_message(&body)),
    })
}

/// GitHub error bodies carry a `message` field; fall back to the raw body.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
