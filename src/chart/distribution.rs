//! Status distribution
//!
//! Counts deliverables per status and converts the counts to whole
//! percentages. Each share is rounded on its own, so the shares of a
//! chart need not add up to exactly 100.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::{Deliverable, ScheduleError, TaskStatus};

/// Number of deliverables per status; every status is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts([usize; TaskStatus::ALL.len()]);

impl StatusCounts {
    /// All statuses at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, status: TaskStatus) -> usize {
        self.0[status.index()]
    }

    pub fn add(&mut self, status: TaskStatus) {
        self.0[status.index()] += 1;
    }

    /// Sum over all statuses
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterates `(status, count)` in display order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, usize)> + '_ {
        TaskStatus::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl FromIterator<TaskStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = TaskStatus>>(iter: I) -> Self {
        let mut counts = Self::new();
        for status in iter {
            counts.add(status);
        }
        counts
    }
}

impl Serialize for StatusCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(TaskStatus::ALL.len()))?;
        for (status, count) in self.iter() {
            map.serialize_entry(status.label(), &count)?;
        }
        map.end()
    }
}

/// Counts deliverables by status
pub fn count_by_status(deliverables: &[Deliverable]) -> StatusCounts {
    deliverables.iter().map(|d| d.status).collect()
}

/// Counts raw status labels, rejecting any label outside the closed set
pub fn count_status_labels<'a>(
    labels: impl IntoIterator<Item = &'a str>,
) -> Result<StatusCounts, ScheduleError> {
    labels.into_iter().map(str::parse::<TaskStatus>).collect()
}

/// One status's share of the whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusShare {
    pub status: TaskStatus,
    pub count: usize,
    pub percent: u32,
}

/// `round(count / total * 100)`, rounding halves up
fn rounded_percent(count: usize, total: usize) -> u32 {
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// Converts counts to percentages, in display order
///
/// Statuses with no deliverables are left out. A zero `total` yields no shares.
/// A `total` below the counted sum is raised to it, so no share exceeds 100.
pub fn to_percentages(counts: &StatusCounts, total: usize) -> Vec<StatusShare> {
    if total == 0 {
        return Vec::new();
    }
    let total = total.max(counts.total());

    counts
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(status, count)| StatusShare {
            status,
            count,
            percent: rounded_percent(count, total),
        })
        .collect()
}

/// Rounded share of completed deliverables, 0 when there are none
pub fn completion_percent(counts: &StatusCounts) -> u32 {
    match counts.total() {
        0 => 0,
        total => rounded_percent(counts.get(TaskStatus::Completed), total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarDate, DurationDays};

    fn with_status(id: &str, status: TaskStatus) -> Deliverable {
        let start: CalendarDate = "2024-01-01".parse().unwrap();
        Deliverable::new(id, "", start, DurationDays::new(1)).with_status(status)
    }

    fn five_deliverables() -> Vec<Deliverable> {
        vec![
            with_status("1", TaskStatus::Completed),
            with_status("2", TaskStatus::Completed),
            with_status("3", TaskStatus::Implementing),
            with_status("4", TaskStatus::OnHold),
            with_status("5", TaskStatus::NotStarted),
        ]
    }

    #[test]
    fn counts_every_status() {
        let counts = count_by_status(&five_deliverables());

        assert_eq!(counts.get(TaskStatus::Completed), 2);
        assert_eq!(counts.get(TaskStatus::Implementing), 1);
        assert_eq!(counts.get(TaskStatus::OnHold), 1);
        assert_eq!(counts.get(TaskStatus::NotStarted), 1);
        assert_eq!(counts.get(TaskStatus::PlanningAndResearch), 0);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.iter().count(), 5);
    }

    #[test]
    fn percentages_skip_empty_statuses() {
        let deliverables = five_deliverables();
        let counts = count_by_status(&deliverables);
        let shares = to_percentages(&counts, deliverables.len());

        let summary: Vec<(TaskStatus, u32)> =
            shares.iter().map(|s| (s.status, s.percent)).collect();
        assert_eq!(
            summary,
            vec![
                (TaskStatus::NotStarted, 20),
                (TaskStatus::Implementing, 20),
                (TaskStatus::OnHold, 20),
                (TaskStatus::Completed, 40),
            ]
        );
    }

    #[test]
    fn zero_total_yields_nothing() {
        assert!(to_percentages(&StatusCounts::new(), 0).is_empty());
        assert_eq!(completion_percent(&StatusCounts::new()), 0);
    }

    #[test]
    fn short_total_is_raised_to_counted_sum() {
        let counts: StatusCounts = [TaskStatus::Completed; 3].into_iter().collect();
        let shares = to_percentages(&counts, 1);

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percent, 100);
    }

    #[test]
    fn single_item_is_whole_chart() {
        let counts: StatusCounts = [TaskStatus::OnHold].into_iter().collect();
        let shares = to_percentages(&counts, 1);

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percent, 100);
        assert_eq!(shares[0].count, 1);
    }

    #[test]
    fn independent_rounding_may_not_sum_to_100() {
        let counts: StatusCounts = [
            TaskStatus::NotStarted,
            TaskStatus::Implementing,
            TaskStatus::Completed,
        ]
        .into_iter()
        .collect();
        let shares = to_percentages(&counts, 3);

        assert!(shares.iter().all(|s| s.percent == 33));
        assert_eq!(shares.iter().map(|s| s.percent).sum::<u32>(), 99);
    }

    #[test]
    fn halves_round_up() {
        // 1 of 8 is 12.5%
        let mut statuses = vec![TaskStatus::Completed];
        statuses.extend(std::iter::repeat(TaskStatus::NotStarted).take(7));
        let counts: StatusCounts = statuses.into_iter().collect();
        let shares = to_percentages(&counts, 8);

        assert_eq!(shares[0].status, TaskStatus::NotStarted);
        assert_eq!(shares[0].percent, 88);
        assert_eq!(shares[1].percent, 13);
    }

    #[test]
    fn completion_share() {
        let counts = count_by_status(&five_deliverables());
        assert_eq!(completion_percent(&counts), 40);
    }

    #[test]
    fn raw_labels_are_validated() {
        let counts = count_status_labels(["Completed", "On Hold", "Completed"]).unwrap();
        assert_eq!(counts.get(TaskStatus::Completed), 2);

        let err = count_status_labels(["Completed", "Archived"]).unwrap_err();
        assert_eq!(err, ScheduleError::UnknownStatus("Archived".into()));
    }

    #[test]
    fn counts_serialize_with_labels() {
        let counts = count_by_status(&five_deliverables());
        let value = serde_json::to_value(counts).unwrap();

        assert_eq!(value["Completed"], 2);
        assert_eq!(value["Planning & Research"], 0);
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
