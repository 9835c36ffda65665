pub mod client;

pub use client::ContributionClient;
