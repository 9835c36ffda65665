use serde::{Deserialize, Serialize};

use super::user::{GitHubUser, PublicRepo};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedSummary {
    pub profile: GitHubUser,
    pub repos: Vec<PublicRepo>,
    pub top_languages: Vec<LanguageStat>,
    pub total_stars: u64,
    pub total_commits: u64,
    pub longest_streak: u32,
    pub most_productive_month: ProductiveMonth,
    pub universal_rank: UniversalRank,
    pub busiest_day: String,
    pub busiest_time: Persona,
    pub year: i32,
    pub previous_year_comparison: YearComparison,
    pub next_year_prediction: Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductiveMonth {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniversalRank {
    #[serde(rename = "Top 1%")]
    Top1,
    #[serde(rename = "Top 5%")]
    Top5,
    #[serde(rename = "Top 10%")]
    Top10,
    #[serde(rename = "Top 25%")]
    Top25,
    #[serde(rename = "Top 50%")]
    Top50,
}

impl std::fmt::Display for UniversalRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniversalRank::Top1 => write!(f, "Top 1%"),
            UniversalRank::Top5 => write!(f, "Top 5%"),
            UniversalRank::Top10 => write!(f, "Top 10%"),
            UniversalRank::Top25 => write!(f, "Top 25%"),
            UniversalRank::Top50 => write!(f, "Top 50%"),
        }
    }
}

/// Time-of-day persona derived from push activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "Early Bird")]
    EarlyBird,
    #[serde(rename = "Lunchtime Coder")]
    LunchtimeCoder,
    #[serde(rename = "Evening Hacker")]
    EveningHacker,
    #[serde(rename = "Night Owl")]
    NightOwl,
    Daytime,
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Persona::EarlyBird => write!(f, "Early Bird"),
            Persona::LunchtimeCoder => write!(f, "Lunchtime Coder"),
            Persona::EveningHacker => write!(f, "Evening Hacker"),
            Persona::NightOwl => write!(f, "Night Owl"),
            Persona::Daytime => write!(f, "Daytime"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub current: u64,
    pub previous: u64,
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearComparison {
    pub total_commits: MetricComparison,
    pub total_stars: MetricComparison,
    pub longest_streak: MetricComparison,
    pub public_repos: MetricComparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub predicted_commits: u64,
    pub predicted_stars: u64,
    pub predicted_streak: u64,
    pub message: String,
    pub confidence: Confidence,
}
