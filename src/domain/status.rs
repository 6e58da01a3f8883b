//! Deliverable status
//!
//! The status set is closed. Stored records use the display labels;
//! anything else is rejected rather than mapped to a default bucket.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;

/// Status of a deliverable, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "Planning & Research")]
    PlanningAndResearch,
    Implementing,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

impl TaskStatus {
    /// Every status, in display order
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::NotStarted,
        TaskStatus::PlanningAndResearch,
        TaskStatus::Implementing,
        TaskStatus::OnHold,
        TaskStatus::Completed,
    ];

    /// Returns the display label, which is also the stored form
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::PlanningAndResearch => "Planning & Research",
            TaskStatus::Implementing => "Implementing",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Returns a short label for legends
    pub fn short_label(&self) -> &'static str {
        match self {
            TaskStatus::PlanningAndResearch => "Planning",
            other => other.label(),
        }
    }

    /// Returns the chart color (hex) for this status
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "#10b981",
            TaskStatus::Implementing => "#3b82f6",
            TaskStatus::PlanningAndResearch => "#8b5cf6",
            TaskStatus::OnHold => "#f59e0b",
            TaskStatus::NotStarted => "#6b7280",
        }
    }

    /// Position in [`TaskStatus::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = ScheduleError;

    /// Accepts the display label or a kebab/snake-case spelling (`on-hold`, `not_started`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(status) = TaskStatus::ALL.into_iter().find(|st| st.label() == trimmed) {
            return Ok(status);
        }

        let normalized = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "not_started" => Ok(TaskStatus::NotStarted),
            "planning_and_research" | "planning" => Ok(TaskStatus::PlanningAndResearch),
            "implementing" => Ok(TaskStatus::Implementing),
            "on_hold" => Ok(TaskStatus::OnHold),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ScheduleError::UnknownStatus(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
