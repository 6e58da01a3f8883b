//! Holiday list files
//!
//! Either a JSON array of ISO dates, or plain text with one date per line.
//! In text files, `#` starts a comment and blank lines are ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::{CalendarDate, HolidayCalendar};

/// Loads a holiday list from a file
pub fn load_holidays(path: &Path) -> Result<HolidayCalendar> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read holidays: {}", path.display()))?;

    parse_holidays(&content)
        .with_context(|| format!("Failed to parse holidays: {}", path.display()))
}

/// Parses holiday list text
pub fn parse_holidays(content: &str) -> Result<HolidayCalendar> {
    if content.trim_start().starts_with('[') {
        let dates: Vec<String> =
            serde_json::from_str(content).context("Invalid JSON holiday list")?;
        return Ok(HolidayCalendar::parse(dates.iter().map(String::as_str))?);
    }

    let mut holidays = HolidayCalendar::new();
    for (line_num, line) in content.lines().enumerate() {
        let entry = line.split('#').next().unwrap_or("").trim();
        if entry.is_empty() {
            continue;
        }

        let date: CalendarDate = entry
            .parse()
            .with_context(|| format!("Line {}", line_num + 1))?;
        holidays.insert(date);
    }
    Ok(holidays)
}
