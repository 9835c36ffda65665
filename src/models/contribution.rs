use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u64,
    #[serde(default)]
    pub level: u8,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self {
            date,
            count,
            level: 0,
        }
    }
}

/// One calendar year of contribution data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionYear {
    pub total: u64,
    pub days: Vec<ContributionDay>,
}

impl ContributionYear {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.days.is_empty()
    }
}

/// Payload of the contribution-calendar API.
///
/// `total` is keyed by year; the key may arrive as a string or a number, both of
/// which decode to a JSON object key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionResponse {
    #[serde(default)]
    pub total: HashMap<String, u64>,
    #[serde(default)]
    pub contributions: Vec<ContributionDay>,
}

impl ContributionResponse {
    pub fn into_year(self, year: i32) -> ContributionYear {
        ContributionYear {
            total: self.total.get(&year.to_string()).copied().unwrap_or(0),
            days: self.contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_picks_requested_year() {
        let body = r#"{
            "total": {"2023": 412, "2022": 10},
            "contributions": [
                {"date": "2023-01-01", "count": 3, "level": 1},
                {"date": "2023-01-02", "count": 0, "level": 0}
            ]
        }"#;
        let response: ContributionResponse = serde_json::from_str(body).unwrap();
        let year = response.into_year(2023);
        assert_eq!(year.total, 412);
        assert_eq!(year.days.len(), 2);
        assert_eq!(year.days[0].count, 3);
    }

    #[test]
    fn test_missing_year_total_is_zero() {
        let response: ContributionResponse = serde_json::from_str(r#"{"total": {}}"#).unwrap();
        let year = response.into_year(2023);
        assert!(year.is_empty());
    }
}
