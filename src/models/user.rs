use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const PUSH_EVENT: &str = "PushEvent";

const MAX_USERNAME_LEN: usize = 39;

/// GitHub logins are 1-39 ASCII letters, digits or hyphens. Anything else is
/// rejected before it can be spliced into a request path.
pub fn validate_username(username: &str) -> Result<()> {
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidUsername(username.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    /// Language tag, treating an empty string the same as no detected language.
    pub fn known_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

/// Repository as exposed in the summary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub language: Option<String>,
    pub html_url: String,
    pub fork: bool,
}

impl From<&Repository> for PublicRepo {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            stargazers_count: repo.stars(),
            language: repo.known_language().map(str::to_string),
            html_url: repo.html_url.clone(),
            fork: repo.fork,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn is_push(&self) -> bool {
        self.event_type.as_deref() == Some(PUSH_EVENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("octocat").is_ok());
        assert!(validate_username("some-user-42").is_ok());
        assert!(validate_username(&"a".repeat(39)).is_ok());

        let too_long = "a".repeat(40);
        for bad in ["", "octocat/repos", "a?b", "../x", "üser", too_long.as_str()] {
            assert!(
                matches!(validate_username(bad), Err(Error::InvalidUsername(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}
