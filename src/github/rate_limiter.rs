use reqwest::Response;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::error::{Error, Result};

const LOW_QUOTA_WARNING: u32 = 10;

/// Tracks the GitHub quota reported in response headers.
///
/// A request made while the quota is known to be exhausted fails fast with
/// [`Error::RateLimited`] instead of waiting for the window to reset.
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<RateLimitState>>,
}

struct RateLimitState {
    remaining: Option<u32>,
    reset_at: Option<Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RateLimitState {
                remaining: None,
                reset_at: None,
            })),
        }
    }

    pub async fn check(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        if state.remaining == Some(0) {
            let reset_at = state.reset_at;
            match reset_at {
                Some(reset_at) if reset_at > Instant::now() => {
                    let wait = reset_at - Instant::now();
                    tracing::warn!("GitHub quota exhausted, resets in {:?}", wait);
                    return Err(Error::RateLimited {
                        status: 429,
                        retry_after: wait.as_secs().max(1),
                    });
                }
                _ => {
                    state.remaining = None;
                    state.reset_at = None;
                }
            }
        }

        Ok(())
    }

    pub async fn update_from_response(&self, response: &Response) {
        let Some(remaining) = header_u64(response, "x-ratelimit-remaining") else {
            return;
        };
        let reset = header_u64(response, "x-ratelimit-reset");

        let mut state = self.state.lock().await;
        state.remaining = Some(remaining as u32);
        state.reset_at = reset.map(|ts| Instant::now() + Duration::from_secs(seconds_until(ts)));

        if (remaining as u32) < LOW_QUOTA_WARNING {
            tracing::warn!("GitHub quota running low: {} requests left", remaining);
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a GitHub 403/429 caused by quota exhaustion into [`Error::RateLimited`],
/// keeping the upstream status.
pub fn rate_limit_error(response: &Response) -> Option<Error> {
    let status = response.status().as_u16();
    if status != 403 && status != 429 {
        return None;
    }
    if header_u64(response, "x-ratelimit-remaining") != Some(0) {
        return None;
    }
    let wait = header_u64(response, "x-ratelimit-reset")
        .map(seconds_until)
        .unwrap_or(60);
    Some(Error::RateLimited {
        status,
        retry_after: wait,
    })
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

fn seconds_until(reset_timestamp: u64) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    reset_timestamp.saturating_sub(now)
}
