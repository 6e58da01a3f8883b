//! Working-day predicate
//!
//! Sunday is never a working day. Saturday and listed holidays are
//! skipped when the deliverable's exclusions ask for it.

use crate::domain::{CalendarDate, ExclusionConfig, HolidayCalendar};

/// Longest run of consecutive non-working days the projector will scan
/// before giving up: ten years of calendar days.
pub const DEFAULT_SCAN_LIMIT_DAYS: u32 = 3653;

/// Returns true if `date` is not a working day under `exclusions`
pub fn is_non_working_day(
    date: CalendarDate,
    exclusions: ExclusionConfig,
    holidays: &HolidayCalendar,
) -> bool {
    date.is_sunday()
        || (exclusions.exclude_saturdays && date.is_saturday())
        || (exclusions.exclude_holidays && holidays.contains(&date))
}

/// The caller-supplied context for one scheduling computation
///
/// Borrows the holiday list; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct WorkCalendar<'a> {
    holidays: &'a HolidayCalendar,
    scan_limit_days: u32,
}

impl<'a> WorkCalendar<'a> {
    /// Creates a calendar with the default scan limit
    pub fn new(holidays: &'a HolidayCalendar) -> Self {
        Self {
            holidays,
            scan_limit_days: DEFAULT_SCAN_LIMIT_DAYS,
        }
    }

    /// Overrides the scan limit (consecutive non-working days)
    pub fn with_scan_limit(mut self, days: u32) -> Self {
        self.scan_limit_days = days;
        self
    }

    pub fn holidays(&self) -> &'a HolidayCalendar {
        self.holidays
    }

    pub fn scan_limit_days(&self) -> u32 {
        self.scan_limit_days
    }

    pub fn is_working_day(&self, date: CalendarDate, exclusions: ExclusionConfig) -> bool {
        !is_non_working_day(date, exclusions, self.holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn sunday_is_always_excluded() {
        let none = HolidayCalendar::new();
        let sunday = date("2024-01-07");

        assert!(is_non_working_day(sunday, ExclusionConfig::sundays_only(), &none));
        assert!(is_non_working_day(sunday, ExclusionConfig::new(true, true), &none));
    }

    #[test]
    fn saturday_depends_on_config() {
        let none = HolidayCalendar::new();
        let saturday = date("2024-01-06");

        assert!(!is_non_working_day(saturday, ExclusionConfig::new(false, true), &none));
        assert!(is_non_working_day(saturday, ExclusionConfig::new(true, false), &none));
    }

    #[test]
    fn holidays_depend_on_config() {
        let holidays = HolidayCalendar::parse(["2024-01-01"]).unwrap();
        let new_year = date("2024-01-01");

        assert!(is_non_working_day(new_year, ExclusionConfig::new(false, true), &holidays));
        assert!(!is_non_working_day(new_year, ExclusionConfig::new(false, false), &holidays));
        assert!(!is_non_working_day(date("2024-01-02"), ExclusionConfig::default(), &holidays));
    }

    #[test]
    fn weekdays_are_working_days() {
        let none = HolidayCalendar::new();
        let calendar = WorkCalendar::new(&none);
        let all = ExclusionConfig::new(true, true);

        for day in ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"] {
            assert!(calendar.is_working_day(date(day), all), "{day}");
        }
    }

    #[test]
    fn scan_limit_override() {
        let none = HolidayCalendar::new();
        assert_eq!(WorkCalendar::new(&none).scan_limit_days(), DEFAULT_SCAN_LIMIT_DAYS);
        assert_eq!(WorkCalendar::new(&none).with_scan_limit(30).scan_limit_days(), 30);
    }
}
