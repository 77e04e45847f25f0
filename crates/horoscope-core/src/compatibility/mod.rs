//! Pairwise compatibility.
//!
//! Two strategies feed one aggregation:
//! - **Numeric**: per-category similarity `100 - |a - b| / 2` (biorhythm)
//! - **Affinity**: static symmetric pair tables (zodiac, numerology)
//!
//! Both produce unrounded category scores that [`CompatibilityScore::from_categories`]
//! averages, rounds and buckets.

mod affinity;
mod scorer;

use std::collections::BTreeMap;

use chrono::NaiveDate;

pub use affinity::{AffinityTable, ELEMENT_AFFINITY, MODALITY_AFFINITY, NUMBER_AFFINITY};
pub use scorer::{category_similarity, score, CompatibilityScore, Rating};

use crate::cycle::{days_since_origin, BiorhythmCalculator, Cycle};
use crate::numerology::ReductionResult;
use crate::zodiac::ZodiacSign;

/// Biorhythm compatibility of two people on `date`.
///
/// Both are evaluated on the same date; each cycle is compared with the
/// numeric strategy on unrounded values.
///
/// # Panics
/// Panics if `date` precedes either birth date.
pub fn biorhythm_compatibility(
    calculator: &BiorhythmCalculator,
    birth_a: NaiveDate,
    birth_b: NaiveDate,
    date: NaiveDate,
) -> CompatibilityScore {
    let raw_a = calculator.raw_values(days_since_origin(birth_a, date) as f64);
    let raw_b = calculator.raw_values(days_since_origin(birth_b, date) as f64);

    let values = |raw: [f64; 3]| -> BTreeMap<String, f64> {
        Cycle::ALL
            .iter()
            .map(|c| (c.name().to_string(), raw[c.index()]))
            .collect()
    };

    let result = score(&values(raw_a), &values(raw_b));
    tracing::debug!(
        %date,
        overall = result.overall,
        rating = %result.rating,
        "biorhythm compatibility"
    );
    result
}

/// Sun-sign compatibility from element and modality affinity.
pub fn zodiac_compatibility(a: ZodiacSign, b: ZodiacSign) -> CompatibilityScore {
    CompatibilityScore::from_categories([
        ("element", ELEMENT_AFFINITY.lookup(a.element(), b.element())),
        ("modality", MODALITY_AFFINITY.lookup(a.modality(), b.modality())),
    ])
}

/// Life-path compatibility. Master numbers are compared by their root.
pub fn numerology_compatibility(a: ReductionResult, b: ReductionResult) -> CompatibilityScore {
    CompatibilityScore::from_categories([(
        "life_path",
        NUMBER_AFFINITY.lookup(a.root(), b.root()),
    )])
}
