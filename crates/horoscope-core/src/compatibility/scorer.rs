//! Per-category similarity, mean aggregation and rating buckets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::constants::compatibility::{EXCELLENT, GOOD, MODERATE};
use crate::cycle::round2;

/// Qualitative compatibility bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Challenging,
    Moderate,
    Good,
    Excellent,
}

impl Rating {
    /// Bucket for a score; a score equal to a threshold takes the higher bucket.
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT {
            Rating::Excellent
        } else if score >= GOOD {
            Rating::Good
        } else if score >= MODERATE {
            Rating::Moderate
        } else {
            Rating::Challenging
        }
    }

    /// Content-table key.
    pub fn key(self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Moderate => "moderate",
            Rating::Challenging => "challenging",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Compatibility between two identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// Score per category, each in `[0, 100]`.
    pub per_category: BTreeMap<String, f64>,
    /// Mean of the category scores.
    pub overall: f64,
    pub rating: Rating,
}

impl CompatibilityScore {
    /// Aggregate unrounded category scores.
    ///
    /// The mean is taken over unrounded values; category scores and the
    /// mean are rounded once on the way out, and the rating is read from the
    /// rounded mean so the bucket always agrees with the displayed number.
    ///
    /// # Panics
    /// Panics if `categories` is empty.
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let raw: Vec<(String, f64)> = categories
            .into_iter()
            .map(|(name, score)| (name.into(), score.clamp(0.0, 100.0)))
            .collect();
        assert!(!raw.is_empty(), "compatibility needs at least one shared category");

        let mean = raw.iter().map(|(_, s)| s).sum::<f64>() / raw.len() as f64;
        let overall = round2(mean);

        Self {
            per_category: raw.into_iter().map(|(k, s)| (k, round2(s))).collect(),
            overall,
            rating: Rating::from_score(overall),
        }
    }
}

/// Similarity of two values on the `[-100, 100]` scale.
///
/// ```text
/// similarity = clamp(100 - |a - b| / 2, 0, 100)
/// ```
#[inline]
pub fn category_similarity(a: f64, b: f64) -> f64 {
    (100.0 - (a - b).abs() / 2.0).clamp(0.0, 100.0)
}

/// Numeric strategy: score every category present in both maps.
///
/// Categories present on only one side are ignored. Symmetric in its
/// arguments.
///
/// # Panics
/// Panics if the maps share no category.
pub fn score(
    values_a: &BTreeMap<String, f64>,
    values_b: &BTreeMap<String, f64>,
) -> CompatibilityScore {
    let shared = values_a.iter().filter_map(|(category, a)| {
        values_b
            .get(category)
            .map(|b| (category.clone(), category_similarity(*a, *b)))
    });
    CompatibilityScore::from_categories(shared)
}
