pub mod activity;
pub mod comparison;
pub mod deriver;
pub mod languages;
pub mod months;
pub mod pipeline;
pub mod rank;
pub mod streak;
pub mod year;

pub use deriver::{DeriveInput, StatsDeriver};
pub use pipeline::WrappedPipeline;
pub use year::{current_wrapped_year, resolve_wrapped_year};
