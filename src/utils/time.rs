//! Time and timestamp utilities

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

/// Overridable notion of "now"
///
/// When an override is set every caller sees that instant, which is how
/// as-of queries and backdated mutations travel in time.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    overridden: Option<NaiveDateTime>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the clock to `t`
    pub fn set(&mut self, t: NaiveDateTime) {
        debug!(at = %t, "virtual clock set");
        self.overridden = Some(t);
    }

    /// Return to real time
    pub fn unset(&mut self) {
        if self.overridden.take().is_some() {
            debug!("virtual clock unset");
        }
    }

    /// Current instant: the override if set, else local wall-clock time
    pub fn now(&self) -> NaiveDateTime {
        self.overridden.unwrap_or_else(current_timestamp)
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }
}

/// Get current local wall-clock time
pub fn current_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Drop seconds and sub-second precision
pub fn floor_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

/// First instant of a calendar day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of a calendar day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    date.and_time(last)
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a dataset timestamp
///
/// Accepts space or `T` separated date-times with optional seconds, or a
/// bare date meaning midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(start_of_day)
        })
}
