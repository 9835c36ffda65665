use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error ({status}): {message}")]
    GitHubApi { status: u16, message: String },

    #[error("Contribution API error: {0}")]
    ContributionApi(String),

    #[error("Rate limit exceeded ({status}), retry after {retry_after} seconds")]
    RateLimited { status: u16, retry_after: u64 },

    #[error("GitHub user '{0}' not found")]
    UserNotFound(String),

    #[error("Invalid GitHub username: '{0}'")]
    InvalidUsername(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited { .. } | Error::Network(_))
    }

    /// HTTP status reported to callers of the summary endpoint.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::UserNotFound(_) => 404,
            Error::InvalidUsername(_) => 400,
            Error::RateLimited { status, .. } => *status,
            Error::GitHubApi { status, .. } => *status,
            Error::Network(e) => e.status().map(|s| s.as_u16()).unwrap_or(500),
            _ => 500,
        }
    }
}
