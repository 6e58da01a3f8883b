//! # Scheduling Engine
//!
//! Deterministic date arithmetic over deliverables.
//!
//! | Stage | Module | Operation |
//! |-------|--------|-----------|
//! | Calendar predicate | `calendar` | [`is_non_working_day`] |
//! | Working-day projection | `projector` | [`project_end`] |
//! | Range aggregation | `aggregate` | [`aggregate`], [`next_available_start`] |
//! | Overlap detection | `overlap` | [`is_occupied`], [`find_conflicts`] |
//!
//! Holidays and "today" are always passed in by the caller. Every function
//! is pure, so concurrent callers need no locking.

mod aggregate;
mod calendar;
mod overlap;
mod projector;

pub use aggregate::{aggregate, next_available_start, AggregatedSpan, DEFAULT_DELIVERABLE_DAYS};
pub use calendar::{is_non_working_day, WorkCalendar, DEFAULT_SCAN_LIMIT_DAYS};
pub use overlap::{find_conflicts, is_occupied};
pub use projector::project_end;
