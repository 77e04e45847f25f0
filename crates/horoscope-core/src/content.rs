//! Content lookup by bucket key.
//!
//! The engine only selects keys; prose lives behind [`ContentLookup`]. Keys are
//! namespaced: `phase.<kebab-phase>`, `number.<n>`, `cycle.<name>`,
//! `rating.<name>`, `sign.<name>`.

use crate::compatibility::Rating;
use crate::cycle::{Cycle, LunarPhase};
use crate::numerology::ReductionResult;
use crate::zodiac::ZodiacSign;

/// Maps bucket keys to display text.
///
/// Implementors provide [`lookup`](ContentLookup::lookup); the typed helpers
/// build the keys.
pub trait ContentLookup: Send + Sync {
    /// Text for a fully-qualified key, if any.
    fn lookup(&self, key: &str) -> Option<&str>;

    fn phase(&self, phase: LunarPhase) -> Option<&str> {
        self.lookup(&format!("phase.{}", phase.key()))
    }

    /// Master numbers have their own entries.
    fn number(&self, reduction: ReductionResult) -> Option<&str> {
        self.lookup(&format!("number.{}", reduction.key()))
    }

    fn cycle(&self, cycle: Cycle) -> Option<&str> {
        self.lookup(&format!("cycle.{}", cycle.name()))
    }

    fn rating(&self, rating: Rating) -> Option<&str> {
        self.lookup(&format!("rating.{}", rating.key()))
    }

    fn sign(&self, sign: ZodiacSign) -> Option<&str> {
        self.lookup(&format!("sign.{}", sign.key()))
    }
}

/// One-word keywords compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

static KEYWORDS: &[(&str, &str)] = &[
    ("phase.new-moon", "beginnings"),
    ("phase.waxing-crescent", "intention"),
    ("phase.first-quarter", "action"),
    ("phase.waxing-gibbous", "refinement"),
    ("phase.full-moon", "culmination"),
    ("phase.waning-gibbous", "gratitude"),
    ("phase.last-quarter", "release"),
    ("phase.waning-crescent", "rest"),
    ("number.1", "leadership"),
    ("number.2", "partnership"),
    ("number.3", "expression"),
    ("number.4", "stability"),
    ("number.5", "freedom"),
    ("number.6", "care"),
    ("number.7", "reflection"),
    ("number.8", "ambition"),
    ("number.9", "compassion"),
    ("number.11", "intuition"),
    ("number.22", "mastery"),
    ("number.33", "guidance"),
    ("cycle.physical", "energy"),
    ("cycle.emotional", "mood"),
    ("cycle.intellectual", "focus"),
    ("rating.excellent", "harmonious"),
    ("rating.good", "supportive"),
    ("rating.moderate", "workable"),
    ("rating.challenging", "demanding"),
    ("sign.aries", "initiative"),
    ("sign.taurus", "patience"),
    ("sign.gemini", "curiosity"),
    ("sign.cancer", "nurture"),
    ("sign.leo", "confidence"),
    ("sign.virgo", "precision"),
    ("sign.libra", "balance"),
    ("sign.scorpio", "intensity"),
    ("sign.sagittarius", "adventure"),
    ("sign.capricorn", "discipline"),
    ("sign.aquarius", "originality"),
    ("sign.pisces", "empathy"),
];

impl ContentLookup for StaticContent {
    fn lookup(&self, key: &str) -> Option<&str> {
        KEYWORDS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}
