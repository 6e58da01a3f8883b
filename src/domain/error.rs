//! Errors raised by the scheduling engine
//!
//! Every failure is synchronous and local. Callers decide how to surface
//! them; nothing here is retryable.

use thiserror::Error;

use super::date::CalendarDate;

/// Broad category of a [`ScheduleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text could not be parsed
    Parse,
    /// Input parsed but violates a domain rule
    Validation,
    /// The exclusion setup leaves no reachable working day
    Configuration,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid duration {0}: duration must be zero or more days")]
    NegativeDuration(i64),

    #[error("Invalid duration {0}: too many days")]
    DurationTooLarge(i64),

    #[error("Unknown status '{0}': expected one of Not Started, Planning & Research, Implementing, On Hold, Completed")]
    UnknownStatus(String),

    #[error("No working day found within {limit} days after {from}: every day is excluded")]
    ScanLimitExceeded { from: CalendarDate, limit: u32 },

    #[error("Date arithmetic left the supported calendar range after {0}")]
    DateOutOfRange(CalendarDate),
}

impl ScheduleError {
    /// Returns the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::InvalidDate(_) => ErrorKind::Parse,
            ScheduleError::NegativeDuration(_)
            | ScheduleError::DurationTooLarge(_)
            | ScheduleError::UnknownStatus(_) => ErrorKind::Validation,
            ScheduleError::ScanLimitExceeded { .. } | ScheduleError::DateOutOfRange(_) => {
                ErrorKind::Configuration
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(
            ScheduleError::InvalidDate("x".into()).kind(),
            ErrorKind::Parse
        );
        assert_eq!(ScheduleError::NegativeDuration(-1).kind(), ErrorKind::Validation);
        assert_eq!(
            ScheduleError::UnknownStatus("Done".into()).kind(),
            ErrorKind::Validation
        );

        let from: CalendarDate = "2024-01-01".parse().unwrap();
        assert_eq!(
            ScheduleError::ScanLimitExceeded { from, limit: 10 }.kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn messages_name_the_input() {
        let err = ScheduleError::InvalidDate("2024-13-01".into());
        assert!(err.to_string().contains("2024-13-01"));

        let err = ScheduleError::NegativeDuration(-3);
        assert!(err.to_string().contains("-3"));
    }
}
