//! Working-day projection
//!
//! The start date counts as the first day of the duration when it is a
//! working day. Walking forward from the start, each working day consumes
//! one day of the duration; the end date is the last day consumed. A zero
//! duration ends on the start date itself, even if that day is excluded.

use std::iter;

use tracing::{debug, warn};

use super::calendar::WorkCalendar;
use crate::domain::{
    CalendarDate, DateRange, DurationDays, ExclusionConfig, HolidayCalendar, ScheduleError, Slot,
};

/// Projects the end date of `duration` working days starting at `start`
pub fn project_end(
    start: CalendarDate,
    duration: DurationDays,
    exclusions: ExclusionConfig,
    holidays: &HolidayCalendar,
) -> Result<CalendarDate, ScheduleError> {
    WorkCalendar::new(holidays).project_end(&Slot::new(start, duration, exclusions))
}

impl WorkCalendar<'_> {
    /// Projects the end date of a slot
    ///
    /// Fails with [`ScheduleError::ScanLimitExceeded`] if more consecutive
    /// non-working days are met than the scan limit allows.
    pub fn project_end(&self, slot: &Slot) -> Result<CalendarDate, ScheduleError> {
        let mut remaining = slot.duration.get();
        if remaining == 0 {
            return Ok(slot.start);
        }
        // Each working day takes at least one calendar day
        if slot.start.add_days(u64::from(remaining) - 1).is_none() {
            warn!(
                start = %slot.start,
                duration = %slot.duration,
                "duration runs past the calendar"
            );
            return Err(ScheduleError::DateOutOfRange(slot.start));
        }

        let mut idle_since: Option<CalendarDate> = None;
        let mut idle_days: u32 = 0;
        let mut last = slot.start;

        for date in iter::successors(Some(slot.start), CalendarDate::succ) {
            last = date;

            if self.is_working_day(date, slot.exclusions) {
                remaining -= 1;
                if remaining == 0 {
                    debug!(
                        start = %slot.start,
                        duration = %slot.duration,
                        end = %date,
                        "projected end date"
                    );
                    return Ok(date);
                }
                idle_since = None;
                idle_days = 0;
                continue;
            }

            let from = *idle_since.get_or_insert(date);
            idle_days += 1;
            if idle_days > self.scan_limit_days() {
                warn!(%from, limit = self.scan_limit_days(), "no working day within scan limit");
                return Err(ScheduleError::ScanLimitExceeded {
                    from,
                    limit: self.scan_limit_days(),
                });
            }
        }

        Err(ScheduleError::DateOutOfRange(last))
    }

    /// Projects a slot into the date range it occupies
    pub fn project(&self, slot: &Slot) -> Result<DateRange, ScheduleError> {
        let end = self.project_end(slot)?;
        // Projection only walks forward, so end >= start
        DateRange::new(slot.start, end).ok_or(ScheduleError::DateOutOfRange(slot.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn days(n: u32) -> DurationDays {
        DurationDays::new(n)
    }

    #[test]
    fn five_working_days_monday_to_friday() {
        let none = HolidayCalendar::new();
        let end = project_end(date("2024-01-01"), days(5), ExclusionConfig::new(true, true), &none)
            .unwrap();

        assert_eq!(end, date("2024-01-05"));
    }

    #[test]
    fn zero_duration_ends_on_start() {
        let none = HolidayCalendar::new();
        let sunday = date("2024-01-07");

        let end = project_end(sunday, DurationDays::ZERO, ExclusionConfig::new(true, true), &none)
            .unwrap();
        assert_eq!(end, sunday);
    }

    #[test]
    fn skips_sunday_but_not_saturday_by_default() {
        let none = HolidayCalendar::new();
        // Fri, Sat, (Sun skipped), Mon
        let end = project_end(date("2024-01-05"), days(3), ExclusionConfig::default(), &none)
            .unwrap();

        assert_eq!(end, date("2024-01-08"));
    }

    #[test]
    fn skips_whole_weekend_when_saturdays_excluded() {
        let none = HolidayCalendar::new();
        // Fri, (Sat, Sun skipped), Mon, Tue
        let end = project_end(date("2024-01-05"), days(3), ExclusionConfig::new(true, false), &none)
            .unwrap();

        assert_eq!(end, date("2024-01-09"));
    }

    #[test]
    fn skips_listed_holidays() {
        let holidays = HolidayCalendar::parse(["2024-01-02", "2024-01-03"]).unwrap();
        let start = date("2024-01-01");

        let with =
            project_end(start, days(2), ExclusionConfig::new(false, true), &holidays).unwrap();
        assert_eq!(with, date("2024-01-04"));

        let without =
            project_end(start, days(2), ExclusionConfig::new(false, false), &holidays).unwrap();
        assert_eq!(without, date("2024-01-02"));
    }

    #[test]
    fn start_on_non_working_day_walks_forward() {
        let none = HolidayCalendar::new();
        // Sunday start: first working day is Monday
        let end = project_end(date("2024-01-07"), days(1), ExclusionConfig::default(), &none)
            .unwrap();

        assert_eq!(end, date("2024-01-08"));
    }

    #[test]
    fn fully_excluded_window_hits_scan_limit() {
        // Every weekday of January 2024 is a holiday
        let holidays: HolidayCalendar = (0..31)
            .filter_map(|i| date("2024-01-01").add_days(i))
            .collect();
        let calendar = WorkCalendar::new(&holidays).with_scan_limit(10);
        let slot = Slot::new(date("2024-01-01"), days(1), ExclusionConfig::new(true, true));

        let err = calendar.project_end(&slot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err,
            ScheduleError::ScanLimitExceeded {
                from: date("2024-01-01"),
                limit: 10
            }
        );

        // The default limit reaches past the holiday run
        let end = WorkCalendar::new(&holidays).project_end(&slot).unwrap();
        assert_eq!(end, date("2024-02-01"));
    }

    #[test]
    fn end_of_calendar_is_reported() {
        let none = HolidayCalendar::new();
        let near_end = CalendarDate::from(chrono::NaiveDate::MAX);
        let slot = Slot::new(near_end, days(10), ExclusionConfig::default());

        let err = WorkCalendar::new(&none).project_end(&slot).unwrap_err();
        assert!(matches!(err, ScheduleError::DateOutOfRange(_)));
    }

    #[test]
    fn oversized_duration_fails_without_walking() {
        let none = HolidayCalendar::new();
        let start = date("2024-01-01");

        let err =
            project_end(start, days(u32::MAX), ExclusionConfig::default(), &none).unwrap_err();
        assert_eq!(err, ScheduleError::DateOutOfRange(start));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn project_returns_range() {
        let none = HolidayCalendar::new();
        let slot = Slot::new(date("2024-01-08"), days(5), ExclusionConfig::new(true, true));
        let range = WorkCalendar::new(&none).project(&slot).unwrap();

        assert_eq!(range.start(), date("2024-01-08"));
        assert_eq!(range.end(), date("2024-01-12"));
    }

    #[test]
    fn projection_does_not_touch_inputs() {
        let none = HolidayCalendar::new();
        let start = date("2024-01-01");
        let first = project_end(start, days(3), ExclusionConfig::default(), &none).unwrap();
        let second = project_end(start, days(3), ExclusionConfig::default(), &none).unwrap();

        assert_eq!(start, date("2024-01-01"));
        assert_eq!(first, second);
    }
}
