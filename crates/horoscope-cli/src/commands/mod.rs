//! CLI command handlers
//!
//! # Modules
//!
//! - `biorhythm`: single-day, critical-day and period commands
//! - `lunar`: phase lookups and monthly calendars
//! - `numerology`: profile numbers for a name and birth date
//! - `tarot`: daily card, three-card spread and lucky numbers
//! - `compat`: pairwise compatibility
//! - `zodiac`: sun sign lookup
//!
//! Every handler validates its raw arguments with
//! `horoscope_core::validation` before calling the engine, then returns a
//! JSON value for `main` to print.

pub mod biorhythm;
pub mod compat;
pub mod lunar;
pub mod numerology;
pub mod tarot;
pub mod zodiac;

use anyhow::Result;
use chrono::NaiveDate;
use horoscope_core::validation::{parse_birth_date, parse_date, validate_target_date};
use horoscope_core::{EngineConfig, StaticContent};

/// State shared by every handler.
pub struct Context {
    pub config: EngineConfig,
    /// Upper bound for birth dates and default target date.
    pub today: NaiveDate,
    pub content: StaticContent,
}

impl Context {
    pub fn new(config: EngineConfig, today: NaiveDate) -> Self {
        Self {
            config,
            today,
            content: StaticContent,
        }
    }

    pub fn birth(&self, raw: &str) -> Result<NaiveDate> {
        Ok(parse_birth_date(raw, self.today)?)
    }

    /// Optional date argument, defaulting to today.
    pub fn date_or_today(&self, raw: Option<&str>) -> Result<NaiveDate> {
        match raw {
            Some(raw) => Ok(parse_date(raw)?),
            None => Ok(self.today),
        }
    }

    /// Optional date argument that must not precede `birth`.
    pub fn target(&self, birth: NaiveDate, raw: Option<&str>) -> Result<NaiveDate> {
        Ok(validate_target_date(birth, self.date_or_today(raw)?)?)
    }
}
