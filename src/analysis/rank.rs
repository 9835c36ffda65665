use crate::models::UniversalRank;

/// Coarse percentile band from the yearly commit total.
///
/// Thresholds are exclusive and checked from the highest down.
pub fn universal_rank(total_commits: u64) -> UniversalRank {
    match total_commits {
        c if c > 1000 => UniversalRank::Top1,
        c if c > 500 => UniversalRank::Top5,
        c if c > 200 => UniversalRank::Top10,
        c if c > 100 => UniversalRank::Top25,
        _ => UniversalRank::Top50,
    }
}
