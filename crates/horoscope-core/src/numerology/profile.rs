//! Core numbers derived from a birth date and a full name.
//!
//! Date components are folded with [`reduce_strict`] before summing (the
//! traditional life-path method); the final sum keeps master numbers.
//! Letters use the Pythagorean table `A=1 … I=9, J=1 … R=9, S=1 … Z=8`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::reduce::{reduce_strict, ReductionResult};

/// Pythagorean value of an ASCII letter, `None` for anything else.
pub fn letter_value(c: char) -> Option<u64> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c as u64 - 'a' as u64) % 9 + 1)
    } else {
        None
    }
}

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn letter_sum(name: &str, filter: impl Fn(char) -> bool) -> u64 {
    name.chars()
        .filter(|c| filter(*c))
        .filter_map(letter_value)
        .sum()
}

/// Sum of folded day, month and year components.
fn date_component_sum(day: u32, month: u32, year: i32) -> u64 {
    reduce_strict(day as u64) as u64
        + reduce_strict(month as u64) as u64
        + reduce_strict(year.unsigned_abs() as u64) as u64
}

/// Life path number of a birth date.
pub fn life_path(birth: NaiveDate) -> ReductionResult {
    ReductionResult::of(date_component_sum(birth.day(), birth.month(), birth.year()))
}

/// Expression (destiny) number: every letter of the full name.
pub fn expression(name: &str) -> ReductionResult {
    ReductionResult::of(letter_sum(name, |_| true))
}

/// Soul urge number: vowels only.
pub fn soul_urge(name: &str) -> ReductionResult {
    ReductionResult::of(letter_sum(name, is_vowel))
}

/// Personality number: consonants only.
pub fn personality(name: &str) -> ReductionResult {
    ReductionResult::of(letter_sum(name, |c| !is_vowel(c)))
}

/// Personal year: birth day and month combined with the calendar year.
pub fn personal_year(birth: NaiveDate, year: i32) -> ReductionResult {
    ReductionResult::of(date_component_sum(birth.day(), birth.month(), year))
}

/// Personal month: personal year plus the calendar month.
pub fn personal_month(birth: NaiveDate, year: i32, month: u32) -> ReductionResult {
    let py = personal_year(birth, year);
    ReductionResult::of(py.value as u64 + reduce_strict(month as u64) as u64)
}

/// Personal day: personal month plus the calendar day.
pub fn personal_day(birth: NaiveDate, date: NaiveDate) -> ReductionResult {
    let pm = personal_month(birth, date.year(), date.month());
    ReductionResult::of(pm.value as u64 + reduce_strict(date.day() as u64) as u64)
}

/// All core numbers for one person on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: ReductionResult,
    pub expression: ReductionResult,
    pub soul_urge: ReductionResult,
    pub personality: ReductionResult,
    pub personal_year: ReductionResult,
    pub personal_day: ReductionResult,
}

impl NumerologyProfile {
    /// Compute the full profile for `name` born on `birth`, as of `today`.
    pub fn compute(name: &str, birth: NaiveDate, today: NaiveDate) -> Self {
        let profile = Self {
            life_path: life_path(birth),
            expression: expression(name),
            soul_urge: soul_urge(name),
            personality: personality(name),
            personal_year: personal_year(birth, today.year()),
            personal_day: personal_day(birth, today),
        };
        tracing::trace!(
            life_path = profile.life_path.value,
            expression = profile.expression.value,
            "numerology profile computed"
        );
        profile
    }
}
