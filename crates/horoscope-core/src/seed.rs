//! Stable 32-bit seeds for reproducible "random-looking" picks.
//!
//! Not cryptographic. The rolling hash runs over UTF-16 code units with
//! wrapping 32-bit arithmetic, so a key hashes to the same value on every
//! platform and in every language that reproduces `hash = hash * 31 + unit`.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::constants::seed::{
    HASH_MULTIPLIER, LCG_INCREMENT, LCG_MASK, LCG_MULTIPLIER, LUCKY_NUMBER_COUNT, LUCKY_NUMBER_MAX,
};

/// Polynomial rolling hash of `key`.
pub fn seed(key: &str) -> u32 {
    key.encode_utf16().fold(0u32, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(unit as u32)
    })
}

/// Canonical `YYYY-MM-DD:identity` key.
pub fn seed_key(date: NaiveDate, identity: &str) -> String {
    format!("{}:{}", date.format("%Y-%m-%d"), identity)
}

/// Seed for an identity on a date.
#[inline]
pub fn daily_seed(date: NaiveDate, identity: &str) -> u32 {
    seed(&seed_key(date, identity))
}

/// Linear congruential sequence over 31 bits.
///
/// ```text
/// current = (current * 1103515245 + 12345) & 0x7fffffff
/// ```
///
/// Wrapping `u32` arithmetic keeps the low 31 bits identical to the exact
/// product, so the mask yields the same sequence as unbounded integers.
#[derive(Debug, Clone)]
pub struct Lcg {
    current: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { current: seed }
    }

    /// Advance and return the new state.
    #[inline]
    pub fn next_value(&mut self) -> u32 {
        self.current = self
            .current
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.current
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_value())
    }
}

/// Distinct values in `1..=99` drawn from the LCG, sorted ascending.
pub fn lucky_numbers_from_seed(seed: u32) -> Vec<u32> {
    let mut picked = BTreeSet::new();
    let mut lcg = Lcg::new(seed);
    while picked.len() < LUCKY_NUMBER_COUNT {
        picked.insert(lcg.next_value() % LUCKY_NUMBER_MAX + 1);
    }
    picked.into_iter().collect()
}

/// Today's lucky numbers for an identity.
pub fn lucky_numbers(date: NaiveDate, identity: &str) -> Vec<u32> {
    lucky_numbers_from_seed(daily_seed(date, identity))
}
