//! Input validation for callers of the engine.
//!
//! The engine assumes well-formed input and panics on contract violations.
//! These checks run before any engine call and turn bad user input into an
//! [`EngineError`] instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::constants::validation::{MAX_DATE, MIN_DATE, MONTH_DAYS, WEEK_DAYS};
use crate::error::{EngineError, EngineResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest accepted date.
pub fn min_date() -> NaiveDate {
    NaiveDate::parse_from_str(MIN_DATE, DATE_FORMAT).expect("MIN_DATE is a valid date")
}

/// Latest accepted date.
pub fn max_date() -> NaiveDate {
    NaiveDate::parse_from_str(MAX_DATE, DATE_FORMAT).expect("MAX_DATE is a valid date")
}

/// A date must fall in `min..=max`.
fn check_range(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> EngineResult<NaiveDate> {
    if date < min || date > max {
        return Err(EngineError::DateOutOfRange {
            date: date.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(date)
}

/// Any date the engine accepts lies in `1900-01-01..=2199-12-31`.
pub fn validate_date(date: NaiveDate) -> EngineResult<NaiveDate> {
    check_range(date, min_date(), max_date())
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`) within the supported range.
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        EngineError::InvalidDate {
            input: input.to_string(),
        }
    })?;
    validate_date(date)
}

/// A birth date must fall in `1900-01-01..=today`.
pub fn validate_birth_date(date: NaiveDate, today: NaiveDate) -> EngineResult<NaiveDate> {
    check_range(date, min_date(), today.min(max_date()))
}

/// Parse and range-check a birth date in one step.
pub fn parse_birth_date(input: &str, today: NaiveDate) -> EngineResult<NaiveDate> {
    validate_birth_date(parse_date(input)?, today)
}

/// A target date must be in range and must not precede the birth date it is
/// measured from.
pub fn validate_target_date(birth: NaiveDate, target: NaiveDate) -> EngineResult<NaiveDate> {
    validate_date(target)?;
    if target < birth {
        return Err(EngineError::validation(
            "date",
            format!("{} is before birth date {}", target, birth),
        ));
    }
    Ok(target)
}

/// Identity keys must be non-blank.
pub fn validate_identity(identity: &str) -> EngineResult<&str> {
    let trimmed = identity.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation("identity", "must not be empty"));
    }
    Ok(trimmed)
}

/// Names used for numerology need at least one Latin letter.
pub fn validate_name(name: &str) -> EngineResult<&str> {
    let trimmed = validate_identity(name)
        .map_err(|_| EngineError::validation("name", "must not be empty"))?;
    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::validation(
            "name",
            "must contain at least one letter A-Z",
        ));
    }
    Ok(trimmed)
}

/// Range lengths accepted by period endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeLength {
    /// Seven-day summary.
    Week,
    /// Thirty-day summary.
    Month,
    /// Thirty-day critical-day scan.
    CriticalWindow,
}

impl RangeLength {
    /// Number of days covered.
    pub fn days(self) -> u32 {
        match self {
            RangeLength::Week => WEEK_DAYS,
            RangeLength::Month | RangeLength::CriticalWindow => MONTH_DAYS,
        }
    }

    /// Summary range for a requested day count.
    pub fn from_days(days: u32) -> EngineResult<Self> {
        match days {
            WEEK_DAYS => Ok(RangeLength::Week),
            MONTH_DAYS => Ok(RangeLength::Month),
            other => Err(EngineError::InvalidRangeLength(other)),
        }
    }
}
