//! Periodic cycle evaluation.
//!
//! - **Biorhythm**: three sinusoidal cycles keyed by whole days since birth
//! - **Lunar**: synodic phase keyed by elapsed time since a reference new moon
//!
//! Both evaluators are pure: a calculator holds only its immutable parameters
//! and may be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horoscope_core::cycle::{BiorhythmCalculator, Cycle};
//!
//! let calc = BiorhythmCalculator::default();
//! let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let day = calc.daily(birth, NaiveDate::from_ymd_opt(1990, 1, 24).unwrap());
//!
//! assert_eq!(day.sample(Cycle::Physical).value, 0.0);
//! assert!(day.critical_day);
//! ```

pub mod biorhythm;
pub mod lunar;

pub use biorhythm::{
    days_since_origin, BiorhythmCalculator, Cycle, CycleDefinition, CycleSample, DailyBiorhythm,
    BIORHYTHM_CYCLES, EMOTIONAL, INTELLECTUAL, PHYSICAL,
};
pub use lunar::{LunarCalculator, LunarPhase, LunarSample, PhaseEvent};

/// Round to two decimal places.
///
/// Applied once, when a value is handed back to a caller. Never feed the
/// result back into further arithmetic.
#[inline]
pub fn round2(value: f64) -> f64 {
    // + 0.0 folds -0.0 into 0.0
    (value * 100.0).round() / 100.0 + 0.0
}
