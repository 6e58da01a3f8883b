//! Roadmap CLI - deliverable scheduling for roadmap items
//!
//! Projects deliverable end dates over working days, aggregates them into
//! roadmap-item spans, detects overlapping date ranges, and reduces
//! statuses into the proportions of a donut chart. The computational core
//! (`domain`, `schedule`, `chart`) is pure: holidays and "today" are
//! always passed in by the caller.

pub mod domain;
pub mod schedule;
pub mod chart;
pub mod storage;
pub mod cli;

pub use domain::{
    CalendarDate, DateRange, Deliverable, DurationDays, ExclusionConfig, HolidayCalendar,
    RoadmapItem, ScheduleError, Slot, TaskStatus,
};
