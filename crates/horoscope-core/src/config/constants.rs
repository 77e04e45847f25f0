//! Centralized engine constants.
//!
//! These values form the contract between the engine and the content tables
//! that turn bucket keys into prose. Changing any of them changes every
//! previously shown result, so they are defined once here and referenced
//! everywhere else.

/// Biorhythm cycle constants.
///
/// ```text
/// value(t) = sin(2π · t / period) · 100
/// critical ⇔ |value| < CRITICAL_THRESHOLD
/// ```
pub mod biorhythm {
    /// Physical cycle length in days.
    pub const PHYSICAL_PERIOD: f64 = 23.0;

    /// Emotional cycle length in days.
    pub const EMOTIONAL_PERIOD: f64 = 28.0;

    /// Intellectual cycle length in days.
    pub const INTELLECTUAL_PERIOD: f64 = 33.0;

    /// A cycle is critical while its absolute value is below this.
    pub const CRITICAL_THRESHOLD: f64 = 5.0;

    /// Amplitude of every cycle.
    pub const AMPLITUDE: f64 = 100.0;
}

/// Lunar phase constants.
pub mod lunar {
    /// Mean synodic month in days.
    pub const SYNODIC_MONTH: f64 = 29.530_588_67;

    /// Reference new moon, RFC 3339.
    pub const REFERENCE_NEW_MOON: &str = "2024-01-11T11:57:00Z";

    /// Reference new moon as Unix seconds (2024-01-11T11:57:00Z).
    pub const REFERENCE_NEW_MOON_UNIX: i64 = 1_704_974_220;

    /// Number of named phases.
    pub const PHASE_COUNT: usize = 8;

    /// Phase boundary table, in units of one sixteenth of the synodic month.
    ///
    /// Entry `i` is the age at which phase `i + 1` begins; the final entry is
    /// where the month wraps back into the new moon.
    pub const PHASE_BOUNDARY_UNITS: [f64; PHASE_COUNT] =
        [0.5, 3.5, 4.5, 7.5, 8.5, 11.5, 12.5, 15.5];

    /// Number of boundary units in one synodic month.
    pub const UNITS_PER_MONTH: f64 = 16.0;

    /// Seconds in one day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Numerology constants.
pub mod numerology {
    /// Values exempt from further digit reduction.
    pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];
}

/// Deterministic seed and tarot constants.
pub mod seed {
    /// Rolling hash multiplier.
    pub const HASH_MULTIPLIER: u32 = 31;

    /// LCG multiplier (glibc `rand`).
    pub const LCG_MULTIPLIER: u32 = 1_103_515_245;

    /// LCG increment.
    pub const LCG_INCREMENT: u32 = 12_345;

    /// LCG output mask (31 bits).
    pub const LCG_MASK: u32 = 0x7fff_ffff;

    /// Cards in a full tarot deck.
    pub const DECK_SIZE: u32 = 78;

    /// A draw is reversed when `seed % REVERSED_MODULUS == 0`.
    pub const REVERSED_MODULUS: u32 = 3;

    /// Lucky numbers drawn per day.
    pub const LUCKY_NUMBER_COUNT: usize = 3;

    /// Lucky numbers fall in `1..=LUCKY_NUMBER_MAX`.
    pub const LUCKY_NUMBER_MAX: u32 = 99;
}

/// Compatibility rating thresholds. The boundary value belongs to the higher bucket.
pub mod compatibility {
    pub const EXCELLENT: f64 = 80.0;
    pub const GOOD: f64 = 60.0;
    pub const MODERATE: f64 = 40.0;
}

/// Calling-layer date limits.
pub mod validation {
    /// Earliest accepted date.
    pub const MIN_DATE: &str = "1900-01-01";

    /// Latest accepted target date. Leaves headroom for a year-long series
    /// or a year of upcoming phases inside chrono's range.
    pub const MAX_DATE: &str = "2199-12-31";

    /// Range lengths accepted by period endpoints.
    pub const WEEK_DAYS: u32 = 7;
    pub const MONTH_DAYS: u32 = 30;
}
