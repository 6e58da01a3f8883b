//! # Storage Layer
//!
//! Read-only adapters between files and the scheduling engine. Nothing
//! here writes; the application that owns the roadmap persists it.
//!
//! ## Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Roadmap snapshot | JSON or YAML (item or bare deliverable list) | any path |
//! | Holidays | JSON array or one ISO date per line | any path, or `schedule.holidays_file` |
//! | Config | TOML | `.roadmap/config.toml`, then the user config dir |
//!
//! ## Key Types
//!
//! - [`Config`] - Scheduling and chart settings
//! - [`load_snapshot`] - Reads a [`RoadmapItem`](crate::domain::RoadmapItem)
//! - [`load_holidays`] - Reads a [`HolidayCalendar`](crate::domain::HolidayCalendar)

mod config;
mod holidays;
mod snapshot;

pub use config::{Config, ConfigError, ScheduleConfig};
pub use holidays::{load_holidays, parse_holidays};
pub use snapshot::{load_snapshot, parse_snapshot, SnapshotFormat};
