//! Per-invocation context: configuration plus the holiday list
//!
//! This is the only place the CLI reads files besides the snapshot, and
//! the only place it reads the wall clock.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::output::Output;
use crate::domain::{CalendarDate, HolidayCalendar};
use crate::schedule::WorkCalendar;
use crate::storage::{load_holidays, Config};

pub struct Session {
    pub config: Config,
    pub holidays: HolidayCalendar,
}

impl Session {
    /// Loads configuration and holidays for this run
    ///
    /// An explicit holidays file wins over `schedule.holidays_file`.
    pub fn open(
        config_path: Option<&Path>,
        holidays_path: Option<&Path>,
        output: &Output,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        match &config.source {
            Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
            None => output.verbose_ctx("config", "Using defaults"),
        }

        let holidays_path: Option<PathBuf> = holidays_path
            .map(Path::to_path_buf)
            .or_else(|| config.holidays_path());
        let holidays = match holidays_path {
            Some(path) => {
                let holidays = load_holidays(&path)?;
                output.verbose_ctx(
                    "holidays",
                    &format!("Loaded {} holidays from {}", holidays.len(), path.display()),
                );
                holidays
            }
            None => HolidayCalendar::new(),
        };

        Ok(Self { config, holidays })
    }

    /// The calendar every command computes against
    pub fn calendar(&self) -> WorkCalendar<'_> {
        WorkCalendar::new(&self.holidays).with_scan_limit(self.config.schedule.scan_limit_days)
    }
}

/// Parses `--today`, defaulting to the local date
pub fn today_or(arg: Option<&str>) -> Result<CalendarDate> {
    match arg {
        Some(s) => Ok(s.parse()?),
        None => Ok(CalendarDate::from(chrono::Local::now().date_naive())),
    }
}
