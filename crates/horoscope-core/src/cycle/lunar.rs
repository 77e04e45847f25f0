//! Lunar phase from elapsed time since a reference new moon.
//!
//! ```text
//! age          = ((t - ref) mod S + S) mod S
//! illumination = round((1 - cos(2π · age / S)) / 2 · 100)
//! ```
//!
//! Phases are read from [`PHASE_BOUNDARY_UNITS`], measured in sixteenths of
//! the month. New, quarter and full phases each span one unit centred on
//! their astronomical instant; crescents and gibbous phases span three. The
//! new moon wraps around the end of the month:
//!
//! ```text
//! units: 0  .5      3.5  4.5     7.5  8.5     11.5 12.5     15.5  16
//!        |NM| WxC    | FQ | WxG   | FM | WnG   | LQ | WnC    | NM |
//! ```

use std::f64::consts::PI;
use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::round2;
use crate::config::constants::lunar::{
    PHASE_BOUNDARY_UNITS, PHASE_COUNT, REFERENCE_NEW_MOON_UNIX, SECONDS_PER_DAY, SYNODIC_MONTH,
    UNITS_PER_MONTH,
};
use crate::config::LunarConfig;

/// The compiled-in reference new moon (2024-01-11T11:57:00Z).
pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_NEW_MOON_UNIX, 0)
        .expect("reference new moon is a valid timestamp")
}

/// The eight named phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    /// All phases in cycle order.
    pub const ALL: [LunarPhase; PHASE_COUNT] = [
        LunarPhase::NewMoon,
        LunarPhase::WaxingCrescent,
        LunarPhase::FirstQuarter,
        LunarPhase::WaxingGibbous,
        LunarPhase::FullMoon,
        LunarPhase::WaningGibbous,
        LunarPhase::LastQuarter,
        LunarPhase::WaningCrescent,
    ];

    /// Position in cycle order, 0–7.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Phase at cycle position `index`.
    ///
    /// # Panics
    /// Panics if `index > 7`.
    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(phase) => *phase,
            None => panic!("lunar phase index {} out of range 0..{}", index, PHASE_COUNT),
        }
    }

    /// The phase that follows this one.
    #[inline]
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % PHASE_COUNT)
    }

    /// Content-table key.
    pub fn key(self) -> &'static str {
        match self {
            LunarPhase::NewMoon => "new-moon",
            LunarPhase::WaxingCrescent => "waxing-crescent",
            LunarPhase::FirstQuarter => "first-quarter",
            LunarPhase::WaxingGibbous => "waxing-gibbous",
            LunarPhase::FullMoon => "full-moon",
            LunarPhase::WaningGibbous => "waning-gibbous",
            LunarPhase::LastQuarter => "last-quarter",
            LunarPhase::WaningCrescent => "waning-crescent",
        }
    }

    /// New moon, quarters and full moon.
    #[inline]
    pub fn is_principal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Boundary (in units) where this phase ends.
    #[inline]
    fn end_units(self) -> f64 {
        PHASE_BOUNDARY_UNITS[self.index()]
    }

    /// Boundary (in units) where this phase starts; the new moon starts at
    /// the last boundary of the previous month.
    #[inline]
    fn start_units(self) -> f64 {
        PHASE_BOUNDARY_UNITS[(self.index() + PHASE_COUNT - 1) % PHASE_COUNT]
    }

    /// Width of this phase in units.
    #[inline]
    fn span_units(self) -> f64 {
        (self.end_units() - self.start_units()).rem_euclid(UNITS_PER_MONTH)
    }

    /// Classify a lunar age in units of one sixteenth month.
    ///
    /// Ages at or past the last boundary wrap into the new moon.
    pub fn from_units(units: f64) -> Self {
        PHASE_BOUNDARY_UNITS
            .iter()
            .position(|boundary| units < *boundary)
            .map(Self::from_index)
            .unwrap_or(LunarPhase::NewMoon)
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The moon at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarSample {
    pub instant: DateTime<Utc>,
    /// Days since the most recent new moon, in `[0, synodic_month)`.
    pub lunar_age: f64,
    /// Percent of the disc lit, 0–100.
    pub illumination: f64,
    pub phase: LunarPhase,
    pub next_phase: LunarPhase,
    pub days_until_next_phase: f64,
}

/// Start of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEvent {
    pub phase: LunarPhase,
    pub instant: DateTime<Utc>,
}

/// Lunar phase evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarCalculator {
    synodic_month: f64,
    reference: DateTime<Utc>,
}

impl Default for LunarCalculator {
    fn default() -> Self {
        Self {
            synodic_month: SYNODIC_MONTH,
            reference: reference_new_moon(),
        }
    }
}

impl LunarCalculator {
    /// Create from configuration.
    pub fn new(config: &LunarConfig) -> Self {
        Self {
            synodic_month: config.synodic_month,
            reference: config.reference_new_moon,
        }
    }

    /// Synodic month length in days.
    #[inline]
    pub fn synodic_month(&self) -> f64 {
        self.synodic_month
    }

    /// Days in one boundary unit.
    #[inline]
    fn unit_days(&self) -> f64 {
        self.synodic_month / UNITS_PER_MONTH
    }

    /// Unrounded lunar age in days, normalized into `[0, synodic_month)`.
    ///
    /// The double modulo keeps instants before the reference epoch positive.
    pub fn lunar_age(&self, instant: DateTime<Utc>) -> f64 {
        let elapsed_days =
            (instant - self.reference).num_milliseconds() as f64 / (SECONDS_PER_DAY * 1_000.0);
        let s = self.synodic_month;
        ((elapsed_days % s) + s) % s
    }

    /// Phase for an age in days.
    pub fn phase_for_age(&self, age: f64) -> LunarPhase {
        LunarPhase::from_units(age / self.unit_days())
    }

    /// Illumination percent for an age in days, rounded to a whole percent.
    pub fn illumination(&self, age: f64) -> f64 {
        ((1.0 - (2.0 * PI * age / self.synodic_month).cos()) / 2.0 * 100.0).round()
    }

    /// Unrounded days from `age` until the current phase ends.
    ///
    /// Uses the same boundary table as [`Self::phase_for_age`], so the
    /// countdown always lands exactly on the start of the next phase.
    pub fn days_until_next_phase(&self, age: f64) -> f64 {
        let phase = self.phase_for_age(age);
        let target = phase.end_units() * self.unit_days();
        (target - age).rem_euclid(self.synodic_month)
    }

    /// Evaluate the moon at `instant`.
    pub fn evaluate(&self, instant: DateTime<Utc>) -> LunarSample {
        let age = self.lunar_age(instant);
        let phase = self.phase_for_age(age);
        let remaining = self.days_until_next_phase(age);

        tracing::trace!(%instant, age, phase = %phase, "lunar phase evaluated");

        LunarSample {
            instant,
            lunar_age: round2(age),
            illumination: self.illumination(age),
            phase,
            next_phase: phase.next(),
            days_until_next_phase: round2(remaining),
        }
    }

    /// Evaluate the moon at midnight UTC of `date`.
    pub fn evaluate_date(&self, date: NaiveDate) -> LunarSample {
        self.evaluate(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// The next `count` phase starts after `from`.
    ///
    /// With `principal_only`, crescents and gibbous phases are skipped.
    pub fn upcoming_phases(
        &self,
        from: DateTime<Utc>,
        count: usize,
        principal_only: bool,
    ) -> Vec<PhaseEvent> {
        let age = self.lunar_age(from);
        let mut phase = self.phase_for_age(age);
        // Offsets accumulate unrounded; instants are rounded to the millisecond once.
        let mut offset_days = self.days_until_next_phase(age);
        let mut events = Vec::with_capacity(count);

        while events.len() < count {
            phase = phase.next();
            if !principal_only || phase.is_principal() {
                events.push(PhaseEvent {
                    phase,
                    instant: from + days_to_duration(offset_days),
                });
            }
            offset_days += phase.span_units() * self.unit_days();
        }

        events
    }
}

fn days_to_duration(days: f64) -> Duration {
    Duration::milliseconds((days * SECONDS_PER_DAY * 1_000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_reference_constants_agree() {
        use crate::config::constants::lunar::REFERENCE_NEW_MOON;
        let parsed = DateTime::parse_from_rfc3339(REFERENCE_NEW_MOON)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, reference_new_moon());
        assert_eq!(parsed.timestamp(), REFERENCE_NEW_MOON_UNIX);
    }

    #[test]
    fn test_reference_instant_is_new_moon() {
        let calc = LunarCalculator::default();
        let sample = calc.evaluate(reference_new_moon());
        assert_eq!(sample.lunar_age, 0.0);
        assert_eq!(sample.phase, LunarPhase::NewMoon);
        assert_eq!(sample.illumination, 0.0);
        assert_eq!(sample.next_phase, LunarPhase::WaxingCrescent);
    }

    #[test]
    fn test_half_month_is_full_moon() {
        let calc = LunarCalculator::default();
        let half = reference_new_moon() + days_to_duration(SYNODIC_MONTH / 2.0);
        let sample = calc.evaluate(half);
        assert_eq!(sample.phase, LunarPhase::FullMoon);
        assert_eq!(sample.illumination, 100.0);
    }

    #[test]
    fn test_dates_before_epoch_are_normalized() {
        let calc = LunarCalculator::default();
        let age = calc.lunar_age(utc(1900, 1, 1, 0, 0));
        assert!((0.0..SYNODIC_MONTH).contains(&age));

        // Exactly one month before the reference is a new moon again.
        let earlier = reference_new_moon() - days_to_duration(SYNODIC_MONTH);
        let age = calc.lunar_age(earlier);
        assert!(age < 1e-6 || SYNODIC_MONTH - age < 1e-6, "age = {}", age);
    }

    #[test]
    fn test_phase_partition_is_total() {
        let calc = LunarCalculator::default();
        let steps = 100_000;
        let mut seen = [0usize; PHASE_COUNT];
        let mut previous = calc.phase_for_age(0.0);
        let mut transitions = 0;
        for i in 0..steps {
            let age = SYNODIC_MONTH * i as f64 / steps as f64;
            let phase = calc.phase_for_age(age);
            seen[phase.index()] += 1;
            if phase != previous {
                assert_eq!(phase, previous.next(), "phases must advance in order");
                transitions += 1;
                previous = phase;
            }
        }
        assert!(seen.iter().all(|n| *n > 0), "every phase reachable: {:?}", seen);
        // seven transitions inside the month plus the wrap back into new moon
        assert_eq!(transitions, PHASE_COUNT);
    }

    #[test]
    fn test_phase_widths() {
        let total: f64 = LunarPhase::ALL.iter().map(|p| p.span_units()).sum();
        assert_eq!(total, UNITS_PER_MONTH);
        for phase in LunarPhase::ALL {
            let expected = if phase.is_principal() { 1.0 } else { 3.0 };
            assert_eq!(phase.span_units(), expected, "{}", phase);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(LunarPhase::from_units(0.0), LunarPhase::NewMoon);
        assert_eq!(LunarPhase::from_units(0.4999), LunarPhase::NewMoon);
        assert_eq!(LunarPhase::from_units(0.5), LunarPhase::WaxingCrescent);
        assert_eq!(LunarPhase::from_units(3.5), LunarPhase::FirstQuarter);
        assert_eq!(LunarPhase::from_units(4.5), LunarPhase::WaxingGibbous);
        assert_eq!(LunarPhase::from_units(8.0), LunarPhase::FullMoon);
        assert_eq!(LunarPhase::from_units(11.5), LunarPhase::LastQuarter);
        assert_eq!(LunarPhase::from_units(15.4999), LunarPhase::WaningCrescent);
        assert_eq!(LunarPhase::from_units(15.5), LunarPhase::NewMoon);
    }

    #[test]
    fn test_countdown_lands_on_next_phase() {
        let calc = LunarCalculator::default();
        for i in 0..500 {
            let age = SYNODIC_MONTH * i as f64 / 500.0;
            let phase = calc.phase_for_age(age);
            let remaining = calc.days_until_next_phase(age);
            assert!(remaining > 0.0 && remaining <= 3.0 * calc.unit_days() + 1e-9);

            let landed = (age + remaining + 1e-9).rem_euclid(SYNODIC_MONTH);
            assert_eq!(calc.phase_for_age(landed), phase.next(), "age {}", age);
        }
    }

    #[test]
    fn test_upcoming_principal_phases() {
        let calc = LunarCalculator::default();
        let events = calc.upcoming_phases(reference_new_moon(), 4, true);
        let phases: Vec<_> = events.iter().map(|e| e.phase).collect();
        assert_eq!(
            phases,
            vec![
                LunarPhase::FirstQuarter,
                LunarPhase::FullMoon,
                LunarPhase::LastQuarter,
                LunarPhase::NewMoon
            ]
        );
        // The following new-moon window opens half a unit before the next reference.
        let expected = reference_new_moon() + days_to_duration(15.5 * SYNODIC_MONTH / 16.0);
        assert_eq!(events[3].instant, expected);
        assert!(events.windows(2).all(|w| w[0].instant < w[1].instant));
    }

    #[test]
    fn test_upcoming_all_phases_in_order() {
        let calc = LunarCalculator::default();
        let events = calc.upcoming_phases(utc(2025, 6, 1, 0, 0), 16, false);
        assert_eq!(events.len(), 16);
        for pair in events.windows(2) {
            assert_eq!(pair[1].phase, pair[0].phase.next());
        }
    }

    #[test]
    fn test_illumination_range() {
        let calc = LunarCalculator::default();
        for i in 0..=1_000 {
            let age = SYNODIC_MONTH * i as f64 / 1_000.0;
            let lit = calc.illumination(age);
            assert!((0.0..=100.0).contains(&lit));
        }
    }

    #[test]
    fn test_evaluate_date_uses_midnight() {
        let calc = LunarCalculator::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
        assert_eq!(calc.evaluate_date(date), calc.evaluate(utc(2024, 1, 25, 0, 0)));
    }

    #[test]
    fn test_phase_index_roundtrip() {
        for (i, phase) in LunarPhase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
            assert_eq!(LunarPhase::from_index(i), *phase);
        }
        assert_eq!(LunarPhase::WaningCrescent.next(), LunarPhase::NewMoon);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_phase_index_out_of_range_panics() {
        LunarPhase::from_index(8);
    }

    #[test]
    fn test_phase_serializes_as_key() {
        assert_eq!(
            serde_json::to_string(&LunarPhase::WaxingGibbous).unwrap(),
            "\"waxing-gibbous\""
        );
        assert_eq!(LunarPhase::FullMoon.to_string(), "full-moon");
    }
}
