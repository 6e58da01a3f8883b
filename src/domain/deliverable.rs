//! Deliverables and roadmap items
//!
//! Records are snapshots handed over by the application layer. The engine
//! reads them and never mutates them.

use serde::{Deserialize, Serialize};

use super::date::{CalendarDate, DurationDays};
use super::status::TaskStatus;

fn default_true() -> bool {
    true
}

/// Which days besides Sunday are skipped when counting working days
///
/// Sunday is never a working day, whatever this says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionConfig {
    #[serde(default)]
    pub exclude_saturdays: bool,

    /// Stored records that omit this flag exclude holidays
    #[serde(default = "default_true")]
    pub exclude_holidays: bool,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            exclude_saturdays: false,
            exclude_holidays: true,
        }
    }
}

impl ExclusionConfig {
    pub fn new(exclude_saturdays: bool, exclude_holidays: bool) -> Self {
        Self {
            exclude_saturdays,
            exclude_holidays,
        }
    }

    /// Only Sundays are skipped
    pub fn sundays_only() -> Self {
        Self::new(false, false)
    }
}

/// A start date, a duration and the exclusions that apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub start: CalendarDate,
    pub duration: DurationDays,
    pub exclusions: ExclusionConfig,
}

impl Slot {
    pub fn new(start: CalendarDate, duration: DurationDays, exclusions: ExclusionConfig) -> Self {
        Self {
            start,
            duration,
            exclusions,
        }
    }
}

/// A unit of work inside a roadmap item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    /// Unique within its roadmap item
    pub id: String,

    #[serde(default)]
    pub text: String,

    pub status: TaskStatus,

    pub start_date: CalendarDate,

    pub duration_days: DurationDays,

    #[serde(flatten)]
    pub exclusions: ExclusionConfig,
}

impl Deliverable {
    /// Creates a not-started deliverable with default exclusions
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        start_date: CalendarDate,
        duration_days: DurationDays,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            status: TaskStatus::NotStarted,
            start_date,
            duration_days,
            exclusions: ExclusionConfig::default(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionConfig) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// The scheduling inputs of this deliverable
    pub fn slot(&self) -> Slot {
        Slot::new(self.start_date, self.duration_days, self.exclusions)
    }
}

/// A roadmap entry owning a list of deliverables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}

impl RoadmapItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::NotStarted,
            deliverables: Vec::new(),
        }
    }

    /// Finds a deliverable by ID
    pub fn deliverable(&self, id: &str) -> Option<&Deliverable> {
        self.deliverables.iter().find(|d| d.id == id)
    }

    /// Number of completed deliverables
    pub fn completed_count(&self) -> usize {
        self.deliverables
            .iter()
            .filter(|d| d.status.is_complete())
            .count()
    }
}
