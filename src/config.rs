use crate::error::{Error, Result};
use chrono::FixedOffset;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CONTRIBUTIONS_API_URL: &str = "https://github-contributions-api.jogruber.de/v4";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub contributions_api_url: String,
    pub http_timeout_secs: u64,
    pub bind_addr: SocketAddr,
    pub activity_utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            contributions_api_url: DEFAULT_CONTRIBUTIONS_API_URL.to_string(),
            http_timeout_secs: 30,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            activity_utc_offset_hours: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let github_api_url = env::var("GITHUB_API_URL").unwrap_or(defaults.github_api_url);

        let contributions_api_url =
            env::var("CONTRIBUTIONS_API_URL").unwrap_or(defaults.contributions_api_url);

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.http_timeout_secs);

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(v) => v
                .parse()
                .map_err(|_| Error::Config(format!("BIND_ADDR is not a socket address: {}", v)))?,
            Err(_) => defaults.bind_addr,
        };

        let activity_utc_offset_hours = match env::var("ACTIVITY_UTC_OFFSET_HOURS") {
            Ok(v) => v.parse().map_err(|_| {
                Error::Config(format!("ACTIVITY_UTC_OFFSET_HOURS is not an integer: {}", v))
            })?,
            Err(_) => defaults.activity_utc_offset_hours,
        };

        let config = Self {
            github_token,
            github_api_url,
            contributions_api_url,
            http_timeout_secs,
            bind_addr,
            activity_utc_offset_hours,
        };
        config.activity_offset()?;
        Ok(config)
    }

    /// Offset treated as local time when bucketing push events.
    pub fn activity_offset(&self) -> Result<FixedOffset> {
        self.activity_utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                Error::Config(format!(
                    "ACTIVITY_UTC_OFFSET_HOURS out of range: {}",
                    self.activity_utc_offset_hours
                ))
            })
    }
}
