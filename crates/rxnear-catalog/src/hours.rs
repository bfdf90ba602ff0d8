//! Weekly operating hours.
//!
//! The directory service stores per-day windows as `"HH:MM"` strings with
//! 24-hour and closed flags; normalization turns those into [`NaiveTime`]s.
//! [`OperatingHours::is_open_at`] evaluates a schedule against an explicit
//! weekday and local time, so callers own "now".

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One weekday's window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: Option<NaiveTime>,
    pub close: Option<NaiveTime>,
    #[serde(default)]
    pub is_24_hours: bool,
    #[serde(default)]
    pub is_closed: bool,
}

/// Weekly schedule. A day with no entry was never declared by the pharmacy
/// and counts as closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatingHours {
    pub monday: Option<DaySchedule>,
    pub tuesday: Option<DaySchedule>,
    pub wednesday: Option<DaySchedule>,
    pub thursday: Option<DaySchedule>,
    pub friday: Option<DaySchedule>,
    pub saturday: Option<DaySchedule>,
    pub sunday: Option<DaySchedule>,
}

impl OperatingHours {
    #[must_use]
    pub fn for_day(&self, day: Weekday) -> Option<&DaySchedule> {
        match day {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Whether the pharmacy is open at the given weekday and local time.
    ///
    /// Closed for undeclared days and for days flagged closed; always open
    /// when flagged 24-hour; otherwise the window is inclusive on both ends.
    /// A window whose close precedes its open never matches, so declared
    /// overnight hours count as closed after midnight.
    #[must_use]
    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        let Some(schedule) = self.for_day(day) else {
            return false;
        };
        if schedule.is_closed {
            return false;
        }
        if schedule.is_24_hours {
            return true;
        }
        match (schedule.open, schedule.close) {
            (Some(open), Some(close)) => open <= time && time <= close,
            _ => false,
        }
    }
}
