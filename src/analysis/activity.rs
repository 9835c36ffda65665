use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::models::{Event, Persona};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Push timestamps in the given local offset. Events without a timestamp are skipped.
pub fn push_times(events: &[Event], offset: FixedOffset) -> Vec<DateTime<FixedOffset>> {
    events
        .iter()
        .filter(|e| e.is_push())
        .filter_map(|e| e.created_at)
        .map(|t| t.with_timezone(&offset))
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HourBuckets {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
    pub night: u32,
}

impl HourBuckets {
    pub fn from_hours(hours: impl IntoIterator<Item = u32>) -> Self {
        hours.into_iter().fold(Self::default(), |mut b, hour| {
            match hour {
                5..=11 => b.morning += 1,
                12..=17 => b.afternoon += 1,
                18..=22 => b.evening += 1,
                _ => b.night += 1,
            }
            b
        })
    }

    /// Busiest window, checked morning, afternoon, evening, night; the first
    /// checked window wins a tie.
    pub fn persona(&self) -> Persona {
        let max = self.morning.max(self.afternoon).max(self.evening).max(self.night);
        if max == 0 {
            Persona::Daytime
        } else if self.morning == max {
            Persona::EarlyBird
        } else if self.afternoon == max {
            Persona::LunchtimeCoder
        } else if self.evening == max {
            Persona::EveningHacker
        } else {
            Persona::NightOwl
        }
    }
}

pub fn busiest_time(events: &[Event], offset: FixedOffset) -> Persona {
    HourBuckets::from_hours(push_times(events, offset).iter().map(|t| t.hour())).persona()
}

/// Weekday with the most pushes, Sunday first. The lowest index wins a tie,
/// so no pushes at all reports Sunday.
pub fn busiest_day(events: &[Event], offset: FixedOffset) -> &'static str {
    let counts = push_times(events, offset)
        .iter()
        .fold([0u32; 7], |mut counts, t| {
            counts[t.weekday().num_days_from_sunday() as usize] += 1;
            counts
        });

    let max = counts.iter().copied().max().unwrap_or(0);
    let index = counts.iter().position(|&c| c == max).unwrap_or(0);
    WEEKDAY_NAMES[index]
}
