#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gitwrapped::models::{ContributionDay, ContributionYear, Event, GitHubUser, Repository};
use gitwrapped::{ContributionSource, Error, ProfileSource, Result};

pub fn octocat() -> GitHubUser {
    GitHubUser {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
        html_url: "https://github.com/octocat".to_string(),
        bio: Some("GitHub mascot".to_string()),
        public_repos: 3,
        followers: 100,
        following: 9,
        created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
    }
}

pub fn repo(name: &str, language: Option<&str>, stars: u64, created_year: i32) -> Repository {
    Repository {
        name: name.to_string(),
        description: None,
        stargazers_count: Some(stars),
        language: language.map(str::to_string),
        html_url: format!("https://github.com/octocat/{}", name),
        fork: false,
        created_at: Some(Utc.with_ymd_and_hms(created_year, 5, 1, 12, 0, 0).unwrap()),
    }
}

pub fn push(y: i32, m: u32, d: u32, h: u32) -> Event {
    Event {
        event_type: Some("PushEvent".to_string()),
        created_at: Some(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()),
    }
}

pub fn year_of(year: i32, total: u64, counts: &[u64]) -> ContributionYear {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    ContributionYear {
        total,
        days: counts
            .iter()
            .enumerate()
            .map(|(i, c)| ContributionDay::new(start + Duration::days(i as i64), *c))
            .collect(),
    }
}

#[derive(Clone, Default)]
pub struct FakeProfiles {
    pub users: HashMap<String, (GitHubUser, Vec<Repository>, Vec<Event>)>,
    pub rate_limited: bool,
    pub tokens_seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl FakeProfiles {
    pub fn with_user(
        mut self,
        user: GitHubUser,
        repos: Vec<Repository>,
        events: Vec<Event>,
    ) -> Self {
        self.users.insert(user.login.clone(), (user, repos, events));
        self
    }

    fn lookup(&self, username: &str) -> Result<&(GitHubUser, Vec<Repository>, Vec<Event>)> {
        if self.rate_limited {
            return Err(Error::RateLimited {
                status: 429,
                retry_after: 60,
            });
        }
        self.users
            .get(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }
}

#[async_trait]
impl ProfileSource for FakeProfiles {
    async fn get_profile(&self, username: &str) -> Result<GitHubUser> {
        Ok(self.lookup(username)?.0.clone())
    }

    async fn list_repositories(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<Vec<Repository>> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
        Ok(self.lookup(username)?.1.clone())
    }

    async fn list_public_events(&self, username: &str) -> Result<Vec<Event>> {
        Ok(self.lookup(username)?.2.clone())
    }
}

/// Contribution data by year; unknown years come back empty, like a failed fetch.
#[derive(Clone, Default)]
pub struct FakeContributions {
    pub years: HashMap<i32, ContributionYear>,
}

impl FakeContributions {
    pub fn with_year(mut self, year: i32, data: ContributionYear) -> Self {
        self.years.insert(year, data);
        self
    }
}

#[async_trait]
impl ContributionSource for FakeContributions {
    async fn get_contributions(&self, _username: &str, year: i32) -> ContributionYear {
        self.years.get(&year).cloned().unwrap_or_default()
    }
}

/// Profile lookups answer slowly with "not found" while the listings fail
/// immediately with a bare upstream 404.
#[derive(Clone, Default)]
pub struct SlowMissingProfiles;

#[async_trait]
impl ProfileSource for SlowMissingProfiles {
    async fn get_profile(&self, username: &str) -> Result<GitHubUser> {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        Err(Error::UserNotFound(username.to_string()))
    }

    async fn list_repositories(
        &self,
        _username: &str,
        _token: Option<&str>,
    ) -> Result<Vec<Repository>> {
        Err(Error::GitHubApi {
            status: 404,
            message: "Not Found".to_string(),
        })
    }

    async fn list_public_events(&self, _username: &str) -> Result<Vec<Event>> {
        Err(Error::GitHubApi {
            status: 404,
            message: "Not Found".to_string(),
        })
    }
}
