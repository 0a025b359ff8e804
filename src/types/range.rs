//! Time range types used as pure filters

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::time::{end_of_day, floor_to_minute, start_of_day};

/// One end of a time range
///
/// `Unbounded` leaves that side of the range open. It is unrelated to a
/// tombstone value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Bound {
    #[default]
    Unbounded,
    At(NaiveDateTime),
}

impl From<Option<NaiveDateTime>> for Bound {
    fn from(value: Option<NaiveDateTime>) -> Self {
        match value {
            Some(t) => Bound::At(t),
            None => Bound::Unbounded,
        }
    }
}

impl From<NaiveDateTime> for Bound {
    fn from(value: NaiveDateTime) -> Self {
        Bound::At(value)
    }
}

/// Inclusive time range compared at minute resolution
///
/// Ranges are never validated: an inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Bound,
    pub end: Bound,
}

impl TimeRange {
    pub fn new(start: impl Into<Bound>, end: impl Into<Bound>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Range open on both sides
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Range holding a single instant
    pub fn instant(at: NaiveDateTime) -> Self {
        Self::new(at, at)
    }

    /// Range covering a whole calendar day
    pub fn day(date: NaiveDate) -> Self {
        Self::new(start_of_day(date), end_of_day(date))
    }

    /// Everything asserted up to and including `at`
    pub fn up_to(at: NaiveDateTime) -> Self {
        Self::new(Bound::Unbounded, at)
    }

    /// Everything from `at` onwards
    pub fn starting_at(at: NaiveDateTime) -> Self {
        Self::new(at, Bound::Unbounded)
    }

    /// Build a range from date/time inputs
    ///
    /// A missing date leaves that side unbounded. A missing time defaults to
    /// the start of the day for the lower end and the end of the day for the
    /// upper end.
    pub fn from_dates(
        start_date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        end_date: Option<NaiveDate>,
        end_time: Option<NaiveTime>,
    ) -> Self {
        let start = start_date.map(|d| match start_time {
            Some(t) => d.and_time(t),
            None => start_of_day(d),
        });
        let end = end_date.map(|d| match end_time {
            Some(t) => d.and_time(t),
            None => end_of_day(d),
        });
        Self::new(start, end)
    }

    /// Check whether `t` falls inside the range, ignoring sub-minute differences
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        let t = floor_to_minute(t);

        let after_start = match self.start {
            Bound::At(s) => t >= floor_to_minute(s),
            Bound::Unbounded => true,
        };
        let before_end = match self.end {
            Bound::At(e) => t <= floor_to_minute(e),
            Bound::Unbounded => true,
        };

        after_start && before_end
    }
}

/// Valid-time selector for point lookups and mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidTime {
    /// A single valid instant
    At(NaiveDateTime),
    /// Any valid instant within the calendar day
    Day(NaiveDate),
}

impl ValidTime {
    /// Build a selector from a date and an optional time of day
    pub fn from_parts(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        match time {
            Some(t) => ValidTime::At(date.and_time(t)),
            None => ValidTime::Day(date),
        }
    }

    pub fn to_range(self) -> TimeRange {
        match self {
            ValidTime::At(t) => TimeRange::instant(t),
            ValidTime::Day(d) => TimeRange::day(d),
        }
    }
}

impl std::fmt::Display for ValidTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidTime::At(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M")),
            ValidTime::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
