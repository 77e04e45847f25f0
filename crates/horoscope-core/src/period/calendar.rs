//! Month grids of lunar phases.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cycle::{LunarCalculator, LunarPhase};

/// One calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarCalendarDay {
    pub date: NaiveDate,
    pub phase: LunarPhase,
    pub illumination: f64,
    /// The phase differs from the previous day's.
    pub phase_change: bool,
}

/// Phase of every day in a calendar month, evaluated at midnight UTC.
///
/// # Panics
/// Panics if `month` is not in `1..=12` or the year is outside chrono's range.
pub fn lunar_month_calendar(
    calculator: &LunarCalculator,
    year: i32,
    month: u32,
) -> Vec<LunarCalendarDay> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid calendar month {}-{:02}", year, month));

    let mut previous = calculator.evaluate_date(first - Duration::days(1)).phase;
    let mut days = Vec::with_capacity(31);
    let mut date = first;

    while date.month() == month {
        let sample = calculator.evaluate_date(date);
        days.push(LunarCalendarDay {
            date,
            phase: sample.phase,
            illumination: sample.illumination,
            phase_change: sample.phase != previous,
        });
        previous = sample.phase;
        date += Duration::days(1);
    }

    tracing::debug!(year, month, days = days.len(), "lunar calendar built");
    days
}
