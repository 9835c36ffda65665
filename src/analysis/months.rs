use chrono::Datelike;

use crate::analysis::streak::sorted_days;
use crate::models::{ContributionDay, ProductiveMonth};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Per-month contribution sums, in the order months first appear by date.
pub fn month_totals(days: &[ContributionDay]) -> Vec<(&'static str, u64)> {
    sorted_days(days)
        .iter()
        .fold(Vec::new(), |mut totals: Vec<(&'static str, u64)>, day| {
            let month = MONTH_NAMES[day.date.month0() as usize];
            match totals.iter_mut().find(|(name, _)| *name == month) {
                Some((_, sum)) => *sum += day.count,
                None => totals.push((month, day.count)),
            }
            totals
        })
}

/// Month with the highest contribution sum.
///
/// Starts from January with zero and only a strictly greater sum replaces the
/// current pick, so the earliest month wins ties.
pub fn most_productive_month(days: &[ContributionDay]) -> ProductiveMonth {
    let (name, count) = month_totals(days)
        .into_iter()
        .fold((MONTH_NAMES[0], 0u64), |best, (name, count)| {
            if count > best.1 {
                (name, count)
            } else {
                best
            }
        });

    ProductiveMonth {
        name: name.to_string(),
        count,
    }
}
