//! Calendar dates, durations and date ranges
//!
//! Dates carry no time-of-day or zone and cross the library boundary as
//! ISO-8601 strings (`YYYY-MM-DD`). All arithmetic builds new values;
//! nothing is advanced in place.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A day on the calendar, without time-of-day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month and day, if it exists
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of the week
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    pub fn is_saturday(&self) -> bool {
        self.weekday() == Weekday::Sat
    }

    /// Returns the date `days` calendar days later, or None past the end of the calendar
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Returns the following calendar day
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Whole calendar days from `self` to `later` (negative if `later` is earlier)
    pub fn days_until(&self, later: CalendarDate) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // chrono accepts unpadded fields and signed years; the boundary format is strict
        let well_formed = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(ScheduleError::InvalidDate(s.to_string()));
        }

        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .map(Self)
            .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// A deliverable duration in days, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DurationDays(u32);

impl DurationDays {
    pub const ZERO: DurationDays = DurationDays(0);

    pub fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for DurationDays {
    type Error = ScheduleError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        if days < 0 {
            return Err(ScheduleError::NegativeDuration(days));
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| ScheduleError::DurationTooLarge(days))
    }
}

impl From<DurationDays> for i64 {
    fn from(days: DurationDays) -> Self {
        i64::from(days.0)
    }
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of holiday dates supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar(BTreeSet<CalendarDate>);

impl HolidayCalendar {
    /// Creates an empty calendar
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parses a list of ISO date strings, failing on the first malformed entry
    pub fn parse<'a>(dates: impl IntoIterator<Item = &'a str>) -> Result<Self, ScheduleError> {
        dates.into_iter().map(str::parse).collect()
    }

    /// Adds a holiday; returns false if it was already listed
    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.0.contains(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates holidays in calendar order
    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.0.iter()
    }
}

impl FromIterator<CalendarDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An inclusive span of calendar days with `end >= start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Creates a range, or None if `end` precedes `start`
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        (end >= start).then_some(Self { start, end })
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Calendar days between start and end
    pub fn calendar_days(&self) -> i64 {
        self.start.days_until(self.end)
    }

    /// Half-open intersection test: ranges that only touch at an endpoint do not overlap
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}
