use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// A due date with minute resolution
///
/// Fields are stored as given; no calendar validation happens here, so
/// "2/31/2024" is a valid (if unusual) timestamp. The derived ordering
/// compares year, month, day, hour, then minute, which is chronological
/// for every calendar-valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl Timestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Convert to a chrono date-time
    ///
    /// # Returns
    /// `None` if the fields do not name a real calendar minute
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            0,
        )
    }

    /// Date part in store form: `M/D/YYYY`
    pub(crate) fn encode_date(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }

    /// Time part in store form: `H:MM`
    pub(crate) fn encode_time(&self) -> String {
        format!("{}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
        )
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.encode_date(), self.encode_time())
    }
}
