use crate::models::ContributionDay;

/// Days ordered by date; the upstream order is not guaranteed.
pub fn sorted_days(days: &[ContributionDay]) -> Vec<ContributionDay> {
    let mut sorted = days.to_vec();
    sorted.sort_by_key(|d| d.date);
    sorted
}

/// Longest run of consecutive active days, scanning in date order.
pub fn longest_streak(days: &[ContributionDay]) -> u32 {
    let (longest, current) = sorted_days(days)
        .iter()
        .fold((0u32, 0u32), |(longest, current), day| {
            if day.count > 0 {
                (longest, current + 1)
            } else {
                (longest.max(current), 0)
            }
        });
    // a run still open on the last day counts too
    longest.max(current)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    pub(crate) fn days_from(start: NaiveDate, counts: &[u64]) -> Vec<ContributionDay> {
        counts
            .iter()
            .enumerate()
            .map(|(i, c)| ContributionDay::new(start + Duration::days(i as i64), *c))
            .collect()
    }

    fn jan1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    #[test]
    fn test_longest_streak_in_middle() {
        let days = days_from(jan1(), &[5, 0, 3, 2, 0]);
        assert_eq!(longest_streak(&days), 2);
    }

    #[test]
    fn test_streak_open_at_end_counts() {
        let days = days_from(jan1(), &[1, 0, 1, 1, 1]);
        assert_eq!(longest_streak(&days), 3);
    }

    #[test]
    fn test_empty_days() {
        assert_eq!(longest_streak(&[]), 0);
        assert_eq!(longest_streak(&days_from(jan1(), &[0, 0, 0])), 0);
    }

    #[test]
    fn test_invariant_under_input_order() {
        let days = days_from(jan1(), &[4, 4, 0, 1, 1, 1, 0, 2]);
        let mut shuffled = days.clone();
        shuffled.reverse();
        shuffled.swap(1, 5);
        assert_eq!(longest_streak(&days), 3);
        assert_eq!(longest_streak(&shuffled), 3);
    }
}
