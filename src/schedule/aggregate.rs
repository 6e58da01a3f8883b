//! Range aggregation across a roadmap item's deliverables

use serde::Serialize;
use tracing::debug;

use super::calendar::WorkCalendar;
use crate::domain::{
    CalendarDate, DateRange, Deliverable, DurationDays, ExclusionConfig, HolidayCalendar,
    RoadmapItem, ScheduleError, TaskStatus,
};

/// Default length of a newly appended deliverable
pub const DEFAULT_DELIVERABLE_DAYS: u32 = 7;

/// The enclosing span of a set of deliverables
///
/// `duration_days` counts calendar days between start and end, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSpan {
    #[serde(rename = "startDate")]
    pub start: CalendarDate,
    #[serde(rename = "endDate")]
    pub end: CalendarDate,
    pub duration_days: i64,
}

impl AggregatedSpan {
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start, self.end)
    }
}

/// Computes the span enclosing every deliverable; None when there are none
pub fn aggregate(
    deliverables: &[Deliverable],
    holidays: &HolidayCalendar,
) -> Result<Option<AggregatedSpan>, ScheduleError> {
    WorkCalendar::new(holidays).aggregate(deliverables)
}

/// Suggested start for a deliverable appended after all existing ones
///
/// Returns `today` when there are no deliverables.
pub fn next_available_start(
    deliverables: &[Deliverable],
    holidays: &HolidayCalendar,
    today: CalendarDate,
) -> Result<CalendarDate, ScheduleError> {
    WorkCalendar::new(holidays).next_available_start(deliverables, today)
}

impl WorkCalendar<'_> {
    pub fn aggregate(
        &self,
        deliverables: &[Deliverable],
    ) -> Result<Option<AggregatedSpan>, ScheduleError> {
        let mut bounds: Option<(CalendarDate, CalendarDate)> = None;

        for deliverable in deliverables {
            let range = self.project(&deliverable.slot())?;
            bounds = Some(match bounds {
                None => (range.start(), range.end()),
                Some((start, end)) => (start.min(range.start()), end.max(range.end())),
            });
        }

        Ok(bounds.map(|(start, end)| {
            let span = AggregatedSpan {
                start,
                end,
                duration_days: start.days_until(end),
            };
            debug!(
                start = %span.start,
                end = %span.end,
                count = deliverables.len(),
                "aggregated span"
            );
            span
        }))
    }

    /// Latest projected end across `deliverables`, or `today` if there are none
    pub fn next_available_start(
        &self,
        deliverables: &[Deliverable],
        today: CalendarDate,
    ) -> Result<CalendarDate, ScheduleError> {
        let mut latest: Option<CalendarDate> = None;
        for deliverable in deliverables {
            let end = self.project_end(&deliverable.slot())?;
            latest = Some(latest.map_or(end, |l| l.max(end)));
        }
        Ok(latest.unwrap_or(today))
    }
}

impl RoadmapItem {
    /// The span enclosing this item's deliverables
    pub fn span(
        &self,
        calendar: &WorkCalendar<'_>,
    ) -> Result<Option<AggregatedSpan>, ScheduleError> {
        calendar.aggregate(&self.deliverables)
    }

    /// Suggested start date for the next deliverable
    pub fn next_available_start(
        &self,
        calendar: &WorkCalendar<'_>,
        today: CalendarDate,
    ) -> Result<CalendarDate, ScheduleError> {
        calendar.next_available_start(&self.deliverables, today)
    }

    /// Builds the default deliverable appended after the existing ones
    ///
    /// Not started, seven days long, holidays excluded, Saturdays worked.
    pub fn new_deliverable(
        &self,
        id: impl Into<String>,
        text: impl Into<String>,
        calendar: &WorkCalendar<'_>,
        today: CalendarDate,
    ) -> Result<Deliverable, ScheduleError> {
        let start = self.next_available_start(calendar, today)?;
        let text: String = text.into();
        Ok(Deliverable::new(id, text.trim(), start, DurationDays::new(DEFAULT_DELIVERABLE_DAYS))
            .with_status(TaskStatus::NotStarted)
            .with_exclusions(ExclusionConfig::default()))
    }
}
