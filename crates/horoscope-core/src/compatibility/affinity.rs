//! Static symmetric affinity tables.
//!
//! Used where compatibility is a property of the category pair rather than
//! a numeric distance (zodiac elements, modalities, numerology roots). Each
//! unordered pair is listed once; lookup checks both orders, so
//! `lookup(a, b) == lookup(b, a)` holds by construction.

use crate::zodiac::{Element, Modality};

/// Score table keyed by unordered pairs.
#[derive(Debug, Clone, Copy)]
pub struct AffinityTable<K: 'static> {
    entries: &'static [(K, K, f64)],
    /// Score for a key paired with itself when not listed.
    same: f64,
    /// Score for any pair not listed.
    default: f64,
}

impl<K: Copy + PartialEq> AffinityTable<K> {
    pub const fn new(entries: &'static [(K, K, f64)], same: f64, default: f64) -> Self {
        Self {
            entries,
            same,
            default,
        }
    }

    /// Affinity of an unordered pair, in `[0, 100]`.
    pub fn lookup(&self, a: K, b: K) -> f64 {
        self.entries
            .iter()
            .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
            .map(|(_, _, score)| *score)
            .unwrap_or(if a == b { self.same } else { self.default })
    }
}

/// Zodiac element pairs. Fire/air and earth/water complement each other.
pub static ELEMENT_AFFINITY: AffinityTable<Element> = AffinityTable::new(
    &[
        (Element::Fire, Element::Air, 85.0),
        (Element::Earth, Element::Water, 85.0),
        (Element::Fire, Element::Earth, 45.0),
        (Element::Air, Element::Water, 45.0),
        (Element::Earth, Element::Air, 40.0),
        (Element::Fire, Element::Water, 35.0),
    ],
    90.0,
    50.0,
);

/// Zodiac modality pairs.
pub static MODALITY_AFFINITY: AffinityTable<Modality> = AffinityTable::new(
    &[
        (Modality::Cardinal, Modality::Mutable, 75.0),
        (Modality::Cardinal, Modality::Fixed, 65.0),
        (Modality::Fixed, Modality::Mutable, 70.0),
    ],
    60.0,
    50.0,
);

/// Numerology single-digit roots. Members of the same triad
/// ({1,5,7}, {2,4,8}, {3,6,9}) harmonise.
pub static NUMBER_AFFINITY: AffinityTable<u32> = AffinityTable::new(
    &[
        (1, 5, 90.0),
        (1, 7, 90.0),
        (5, 7, 90.0),
        (2, 4, 90.0),
        (2, 8, 90.0),
        (4, 8, 90.0),
        (3, 6, 90.0),
        (3, 9, 90.0),
        (6, 9, 90.0),
    ],
    80.0,
    50.0,
);
