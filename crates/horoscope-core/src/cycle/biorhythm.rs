//! Biorhythm cycles.
//!
//! ```text
//! value = sin(2π · days_since_birth / period) · 100
//! ```
//!
//! | cycle        | period |
//! |--------------|--------|
//! | physical     | 23     |
//! | emotional    | 28     |
//! | intellectual | 33     |
//!
//! A cycle is critical while `|value| < threshold` (default 5). A day is
//! critical when at least one cycle is, and triple-critical when all three are.

use std::f64::consts::PI;
use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::round2;
use crate::config::constants::biorhythm::{
    AMPLITUDE, CRITICAL_THRESHOLD, EMOTIONAL_PERIOD, INTELLECTUAL_PERIOD, PHYSICAL_PERIOD,
};
use crate::config::BiorhythmConfig;

/// Biorhythm cycle identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cycle {
    Physical,
    Emotional,
    Intellectual,
}

impl Cycle {
    /// All cycles in canonical order.
    pub const ALL: [Cycle; 3] = [Cycle::Physical, Cycle::Emotional, Cycle::Intellectual];

    /// Position in [`Cycle::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Cycle::Physical => 0,
            Cycle::Emotional => 1,
            Cycle::Intellectual => 2,
        }
    }

    /// Lowercase name, also the content-table key.
    pub fn name(self) -> &'static str {
        match self {
            Cycle::Physical => "physical",
            Cycle::Emotional => "emotional",
            Cycle::Intellectual => "intellectual",
        }
    }

    /// Static definition with the default critical threshold.
    pub fn definition(self) -> CycleDefinition {
        BIORHYTHM_CYCLES[self.index()]
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One periodic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleDefinition {
    pub id: Cycle,
    pub period_days: f64,
    pub critical_threshold: f64,
}

pub const PHYSICAL: CycleDefinition = CycleDefinition::new(Cycle::Physical, PHYSICAL_PERIOD);
pub const EMOTIONAL: CycleDefinition = CycleDefinition::new(Cycle::Emotional, EMOTIONAL_PERIOD);
pub const INTELLECTUAL: CycleDefinition =
    CycleDefinition::new(Cycle::Intellectual, INTELLECTUAL_PERIOD);

/// The three biorhythm cycles, indexed by [`Cycle::index`].
pub const BIORHYTHM_CYCLES: [CycleDefinition; 3] = [PHYSICAL, EMOTIONAL, INTELLECTUAL];

impl CycleDefinition {
    /// Definition with the default critical threshold.
    pub const fn new(id: Cycle, period_days: f64) -> Self {
        Self {
            id,
            period_days,
            critical_threshold: CRITICAL_THRESHOLD,
        }
    }

    /// Same cycle with a different critical threshold.
    pub const fn with_threshold(self, critical_threshold: f64) -> Self {
        Self {
            critical_threshold,
            ..self
        }
    }

    /// Unrounded cycle value in `[-100, 100]`.
    ///
    /// # Panics
    /// Panics if `days_since_origin` is negative or not finite.
    #[inline]
    pub fn raw_value(&self, days_since_origin: f64) -> f64 {
        assert!(
            days_since_origin.is_finite() && days_since_origin >= 0.0,
            "days_since_origin must be a non-negative number, got {}",
            days_since_origin
        );
        (2.0 * PI * days_since_origin / self.period_days).sin() * AMPLITUDE
    }

    /// The single critical-day predicate. Every caller classifying a cycle
    /// value goes through here.
    #[inline]
    pub fn is_critical(&self, raw_value: f64) -> bool {
        raw_value.abs() < self.critical_threshold
    }

    /// Evaluate this cycle `days_since_origin` days after birth.
    pub fn evaluate(&self, days_since_origin: f64) -> CycleSample {
        let raw = self.raw_value(days_since_origin);
        CycleSample {
            cycle: self.id,
            days_since_origin,
            value: round2(raw),
            critical: self.is_critical(raw),
        }
    }
}

/// A cycle evaluated at one offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleSample {
    pub cycle: Cycle,
    pub days_since_origin: f64,
    /// Rounded to two decimals, in `[-100, 100]`.
    pub value: f64,
    pub critical: bool,
}

/// Whole days from `birth` to `date`.
///
/// # Panics
/// Panics if `date` precedes `birth`; the calling layer must reject such input.
pub fn days_since_origin(birth: NaiveDate, date: NaiveDate) -> i64 {
    let days = (date - birth).num_days();
    assert!(
        days >= 0,
        "target date {} precedes origin date {}",
        date,
        birth
    );
    days
}

/// All three cycles for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBiorhythm {
    pub date: NaiveDate,
    pub days_since_birth: i64,
    pub physical: CycleSample,
    pub emotional: CycleSample,
    pub intellectual: CycleSample,
    /// Mean of the three cycles, rounded once.
    pub overall: f64,
    /// At least one cycle is critical.
    pub critical_day: bool,
    /// All three cycles are critical.
    pub triple_critical: bool,
}

impl DailyBiorhythm {
    /// Sample for one cycle.
    pub fn sample(&self, cycle: Cycle) -> &CycleSample {
        match cycle {
            Cycle::Physical => &self.physical,
            Cycle::Emotional => &self.emotional,
            Cycle::Intellectual => &self.intellectual,
        }
    }

    /// Samples in canonical order.
    pub fn samples(&self) -> [&CycleSample; 3] {
        [&self.physical, &self.emotional, &self.intellectual]
    }

    /// Cycles that are critical on this date.
    pub fn critical_cycles(&self) -> Vec<Cycle> {
        self.samples()
            .iter()
            .filter(|s| s.critical)
            .map(|s| s.cycle)
            .collect()
    }
}

/// Biorhythm evaluator.
///
/// Holds the three cycle definitions with the configured critical threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct BiorhythmCalculator {
    cycles: [CycleDefinition; 3],
}

impl Default for BiorhythmCalculator {
    fn default() -> Self {
        Self {
            cycles: BIORHYTHM_CYCLES,
        }
    }
}

impl BiorhythmCalculator {
    /// Create from configuration.
    pub fn new(config: &BiorhythmConfig) -> Self {
        Self {
            cycles: BIORHYTHM_CYCLES.map(|c| c.with_threshold(config.critical_threshold)),
        }
    }

    /// Cycle definitions in canonical order.
    pub fn cycles(&self) -> &[CycleDefinition; 3] {
        &self.cycles
    }

    /// Definition for one cycle.
    #[inline]
    pub fn definition(&self, cycle: Cycle) -> &CycleDefinition {
        &self.cycles[cycle.index()]
    }

    /// Unrounded values of the three cycles, in canonical order.
    pub fn raw_values(&self, days_since_origin: f64) -> [f64; 3] {
        self.cycles.map(|c| c.raw_value(days_since_origin))
    }

    /// Evaluate one cycle.
    pub fn evaluate(&self, cycle: Cycle, days_since_origin: f64) -> CycleSample {
        self.definition(cycle).evaluate(days_since_origin)
    }

    /// Evaluate all three cycles for `date`.
    ///
    /// # Panics
    /// Panics if `date` precedes `birth`.
    pub fn daily(&self, birth: NaiveDate, date: NaiveDate) -> DailyBiorhythm {
        let days = days_since_origin(birth, date);
        let t = days as f64;
        let raw = self.raw_values(t);
        let [physical, emotional, intellectual] = self.cycles.map(|c| c.evaluate(t));
        let critical_count = [physical, emotional, intellectual]
            .iter()
            .filter(|s| s.critical)
            .count();

        tracing::trace!(%date, days, critical_count, "biorhythm evaluated");

        DailyBiorhythm {
            date,
            days_since_birth: days,
            physical,
            emotional,
            intellectual,
            overall: round2(raw.iter().sum::<f64>() / raw.len() as f64),
            critical_day: critical_count > 0,
            triple_critical: critical_count == self.cycles.len(),
        }
    }

    /// One [`DailyBiorhythm`] per date in `[start, start + days)`.
    pub fn series(&self, birth: NaiveDate, start: NaiveDate, days: u32) -> Vec<DailyBiorhythm> {
        (0..days as i64)
            .map(|offset| self.daily(birth, start + Duration::days(offset)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_physical_cycle_is_critical() {
        let calc = BiorhythmCalculator::default();
        let day = calc.daily(date(1990, 1, 1), date(1990, 1, 24));

        assert_eq!(day.days_since_birth, 23);
        assert_eq!(day.physical.value, 0.0);
        assert!(day.physical.critical);
        assert!(day.critical_day);
    }

    #[test]
    fn test_birth_day_is_triple_critical() {
        let calc = BiorhythmCalculator::default();
        let day = calc.daily(date(2000, 6, 15), date(2000, 6, 15));
        assert!(day.triple_critical);
        assert_eq!(day.critical_cycles(), Cycle::ALL.to_vec());
        assert_eq!(day.overall, 0.0);
    }

    #[test]
    fn test_quarter_period_peaks() {
        // 28 / 4 = 7 → emotional peak
        let sample = EMOTIONAL.evaluate(7.0);
        assert_eq!(sample.value, 100.0);
        assert!(!sample.critical);
        // 3/4 of the cycle → trough
        assert_eq!(EMOTIONAL.evaluate(21.0).value, -100.0);
    }

    #[test]
    fn test_values_stay_in_range() {
        for cycle in BIORHYTHM_CYCLES {
            for d in 0..2_000 {
                let s = cycle.evaluate(d as f64);
                assert!((-100.0..=100.0).contains(&s.value), "{:?}", s);
            }
        }
    }

    #[test]
    fn test_custom_threshold() {
        // sin(2π/23)·100 ≈ 26.98
        let config = BiorhythmConfig {
            critical_threshold: 30.0,
        };
        let calc = BiorhythmCalculator::new(&config);
        assert!(calc.evaluate(Cycle::Physical, 1.0).critical);
        assert!(!BiorhythmCalculator::default()
            .evaluate(Cycle::Physical, 1.0)
            .critical);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!PHYSICAL.is_critical(5.0));
        assert!(!PHYSICAL.is_critical(-5.0));
        assert!(PHYSICAL.is_critical(4.999));
        assert!(PHYSICAL.is_critical(-4.999));
        assert!(PHYSICAL.is_critical(0.0));

        let wide = PHYSICAL.with_threshold(12.5);
        assert!(!wide.is_critical(12.5));
        assert!(!wide.is_critical(-12.5));
        assert!(wide.is_critical(12.499));
    }

    #[test]
    fn test_series_covers_range() {
        let calc = BiorhythmCalculator::default();
        let series = calc.series(date(1985, 3, 10), date(2024, 2, 27), 7);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, date(2024, 2, 27));
        // crosses the leap day
        assert_eq!(series[2].date, date(2024, 2, 29));
        assert_eq!(series[6].date, date(2024, 3, 4));
        assert_eq!(series[1].days_since_birth, series[0].days_since_birth + 1);
    }

    #[test]
    fn test_deterministic() {
        let calc = BiorhythmCalculator::default();
        let a = calc.daily(date(1971, 12, 31), date(2030, 7, 1));
        let b = calc.daily(date(1971, 12, 31), date(2030, 7, 1));
        assert_eq!(a, b);
        assert_eq!(a.physical.value.to_bits(), b.physical.value.to_bits());
    }

    #[test]
    #[should_panic(expected = "precedes origin date")]
    fn test_date_before_birth_panics() {
        days_since_origin(date(2000, 1, 2), date(2000, 1, 1));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_offset_panics() {
        PHYSICAL.evaluate(-1.0);
    }

    #[test]
    fn test_cycle_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Cycle::Intellectual).unwrap(), "\"intellectual\"");
        assert_eq!(Cycle::Emotional.to_string(), "emotional");
    }
}
