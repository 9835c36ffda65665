pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod github;
pub mod contributions;
pub mod analysis;
pub mod render;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use contributions::ContributionClient;
pub use sources::{ContributionSource, ProfileSource};
pub use analysis::{StatsDeriver, WrappedPipeline};
