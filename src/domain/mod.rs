//! Domain models for the roadmap scheduler
//!
//! Value types and errors with no I/O concerns.

mod date;
mod deliverable;
mod error;
mod status;

pub use date::{CalendarDate, DateRange, DurationDays, HolidayCalendar};
pub use deliverable::{Deliverable, ExclusionConfig, RoadmapItem, Slot};
pub use error::{ErrorKind, ScheduleError};
pub use status::TaskStatus;
