//! Horoscope Core Library
//!
//! Deterministic, date and identity seeded computations shared by the
//! biorhythm, lunar, numerology and tarot features.
//!
//! # Architecture
//!
//! This crate defines:
//! - Digit reduction with master-number preservation (`numerology`)
//! - Periodic cycle evaluators for biorhythms and lunar phases (`cycle`)
//! - Seed derivation and the LCG behind daily draws (`seed`, `tarot`)
//! - Pairwise compatibility scoring (`compatibility`)
//! - Range aggregation over the cycle evaluators (`period`)
//! - Error types, configuration and caller-side validation
//!
//! Every computation is a pure function of its inputs; the current time is
//! never read inside the engine.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horoscope_core::numerology::reduce;
//! use horoscope_core::period::PeriodAggregator;
//!
//! assert_eq!(reduce(1990), 1);
//! assert_eq!(reduce(29), 11);
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let summary = PeriodAggregator::default().aggregate(birth, birth, 7);
//! assert_eq!(summary.days, 7);
//! ```

pub mod compatibility;
pub mod config;
pub mod content;
pub mod cycle;
pub mod error;
pub mod numerology;
pub mod period;
pub mod seed;
pub mod tarot;
pub mod validation;
pub mod zodiac;

// Re-exports for convenience
pub use compatibility::{CompatibilityScore, Rating};
pub use config::EngineConfig;
pub use content::{ContentLookup, StaticContent};
pub use cycle::{BiorhythmCalculator, Cycle, LunarCalculator, LunarPhase};
pub use error::{EngineError, EngineResult};
pub use numerology::ReductionResult;
pub use period::{PeriodAggregator, PeriodSummary};
pub use tarot::TarotReader;
pub use zodiac::ZodiacSign;
