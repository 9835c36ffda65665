use chrono::{Datelike, Utc};

/// Year summarized for a request made on `today`.
///
/// December shows the year that is about to close; any other month shows the
/// last completed year.
pub fn resolve_wrapped_year(today: impl Datelike) -> i32 {
    // month0 is 0-based, December is 11
    if today.month0() == 11 {
        today.year()
    } else {
        today.year() - 1
    }
}

pub fn current_wrapped_year() -> i32 {
    resolve_wrapped_year(Utc::now().date_naive())
}
