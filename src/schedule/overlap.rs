//! Overlap detection between a candidate slot and existing deliverables
//!
//! Ranges intersect under half-open semantics: a candidate may start on
//! the day an existing deliverable ends.

use tracing::debug;

use super::calendar::WorkCalendar;
use crate::domain::{DateRange, Deliverable, HolidayCalendar, ScheduleError, Slot};

/// Returns true if the candidate slot overlaps any existing deliverable
///
/// `exclude_id` skips the deliverable being edited, so it is not checked
/// against its own previous dates.
pub fn is_occupied(
    existing: &[Deliverable],
    candidate: &Slot,
    holidays: &HolidayCalendar,
    exclude_id: Option<&str>,
) -> Result<bool, ScheduleError> {
    WorkCalendar::new(holidays).is_occupied(existing, candidate, exclude_id)
}

/// Returns every existing deliverable the candidate slot overlaps
pub fn find_conflicts<'d>(
    existing: &'d [Deliverable],
    candidate: &Slot,
    holidays: &HolidayCalendar,
    exclude_id: Option<&str>,
) -> Result<Vec<&'d Deliverable>, ScheduleError> {
    WorkCalendar::new(holidays).find_conflicts(existing, candidate, exclude_id)
}

fn is_excluded(deliverable: &Deliverable, exclude_id: Option<&str>) -> bool {
    exclude_id == Some(deliverable.id.as_str())
}

impl WorkCalendar<'_> {
    pub fn is_occupied(
        &self,
        existing: &[Deliverable],
        candidate: &Slot,
        exclude_id: Option<&str>,
    ) -> Result<bool, ScheduleError> {
        let wanted = self.project(candidate)?;

        for deliverable in existing.iter().filter(|d| !is_excluded(d, exclude_id)) {
            if self.overlaps_deliverable(&wanted, deliverable)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn find_conflicts<'d>(
        &self,
        existing: &'d [Deliverable],
        candidate: &Slot,
        exclude_id: Option<&str>,
    ) -> Result<Vec<&'d Deliverable>, ScheduleError> {
        let wanted = self.project(candidate)?;

        let mut conflicts = Vec::new();
        for deliverable in existing.iter().filter(|d| !is_excluded(d, exclude_id)) {
            if self.overlaps_deliverable(&wanted, deliverable)? {
                conflicts.push(deliverable);
            }
        }
        Ok(conflicts)
    }

    fn overlaps_deliverable(
        &self,
        wanted: &DateRange,
        deliverable: &Deliverable,
    ) -> Result<bool, ScheduleError> {
        let taken = self.project(&deliverable.slot())?;
        let hit = wanted.overlaps(&taken);
        if hit {
            debug!(id = %deliverable.id, wanted = %wanted, taken = %taken, "date range occupied");
        }
        Ok(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarDate, DurationDays, ExclusionConfig};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn weekdays(id: &str, start: &str, n: u32) -> Deliverable {
        Deliverable::new(id, "", date(start), DurationDays::new(n))
            .with_exclusions(ExclusionConfig::new(true, true))
    }

    fn slot(start: &str, n: u32) -> Slot {
        Slot::new(date(start), DurationDays::new(n), ExclusionConfig::new(true, true))
    }

    fn two_weeks() -> Vec<Deliverable> {
        // [2024-01-01, 2024-01-05] and [2024-01-08, 2024-01-12]
        vec![weekdays("a", "2024-01-01", 5), weekdays("b", "2024-01-08", 5)]
    }

    #[test]
    fn candidate_touching_both_neighbours_is_free() {
        let none = HolidayCalendar::new();
        // Fri 2024-01-05 + 2 weekdays ends Mon 2024-01-08
        let candidate = slot("2024-01-05", 2);

        assert!(!is_occupied(&two_weeks(), &candidate, &none, None).unwrap());
    }

    #[test]
    fn candidate_inside_existing_range_is_occupied() {
        let none = HolidayCalendar::new();
        let candidate = slot("2024-01-03", 1);

        assert!(is_occupied(&two_weeks(), &candidate, &none, None).unwrap());
    }

    #[test]
    fn candidate_enclosing_existing_range_is_occupied() {
        let none = HolidayCalendar::new();
        let candidate = slot("2023-12-29", 15);

        assert!(is_occupied(&two_weeks(), &candidate, &none, None).unwrap());
    }

    #[test]
    fn excluded_id_is_skipped() {
        let none = HolidayCalendar::new();
        let candidate = slot("2024-01-02", 3);
        let existing = two_weeks();

        assert!(is_occupied(&existing, &candidate, &none, None).unwrap());
        assert!(!is_occupied(&existing, &candidate, &none, Some("a")).unwrap());
        assert!(is_occupied(&existing, &candidate, &none, Some("b")).unwrap());
    }

    #[test]
    fn empty_existing_is_never_occupied() {
        let none = HolidayCalendar::new();
        assert!(!is_occupied(&[], &slot("2024-01-01", 5), &none, None).unwrap());
    }

    #[test]
    fn conflicts_lists_every_overlap() {
        let none = HolidayCalendar::new();
        let candidate = slot("2024-01-04", 5);
        let existing = two_weeks();

        let conflicts = find_conflicts(&existing, &candidate, &none, None).unwrap();
        let ids: Vec<&str> = conflicts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let conflicts = find_conflicts(&existing, &candidate, &none, Some("b")).unwrap();
        assert_eq!(conflicts.len(), 1);
    }

    #[test]
    fn holidays_stretch_existing_ranges() {
        let holidays = HolidayCalendar::parse(["2024-01-05"]).unwrap();
        let existing = vec![weekdays("a", "2024-01-01", 5)];
        // With the holiday, "a" runs to Monday 2024-01-08
        let candidate = slot("2024-01-05", 2);

        assert!(is_occupied(&existing, &candidate, &holidays, None).unwrap());
        assert!(!is_occupied(&existing, &candidate, &HolidayCalendar::new(), None).unwrap());
    }
}
