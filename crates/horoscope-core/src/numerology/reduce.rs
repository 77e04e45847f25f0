//! Digit-sum folding with master-number preservation.
//!
//! ```text
//! reduce(1990) = 1+9+9+0 = 19 → 1+9 = 10 → 1+0 = 1
//! reduce(29)   = 2+9 = 11 (master, kept)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::constants::numerology::MASTER_NUMBERS;

/// Returns true for 11, 22 and 33.
#[inline]
pub fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the base-10 digits of `n`.
#[inline]
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Fold `n` to a single digit, stopping early at a master number.
///
/// The master check runs before every fold step, so 11, 22 and 33 are never
/// reduced whether they are the input or an intermediate sum. `0` is returned
/// unchanged.
pub fn reduce(mut n: u64) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n as u32
}

/// Fold `n` to a single digit without the master-number exception.
///
/// Used for the day/month/year components of a date before they are summed.
pub fn reduce_strict(mut n: u64) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n as u32
}

/// A reduced numerology value together with the input it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReductionResult {
    pub input: u64,
    pub value: u32,
}

impl ReductionResult {
    /// Reduce `input`, preserving master numbers.
    pub fn of(input: u64) -> Self {
        Self {
            input,
            value: reduce(input),
        }
    }

    /// Whether the reduced value is a master number.
    #[inline]
    pub fn is_master(&self) -> bool {
        is_master(self.value as u64)
    }

    /// Single-digit root of the value (masters fold: 11→2, 22→4, 33→6).
    #[inline]
    pub fn root(&self) -> u32 {
        reduce_strict(self.value as u64)
    }

    /// Content-table key for this value.
    pub fn key(&self) -> String {
        self.value.to_string()
    }
}
