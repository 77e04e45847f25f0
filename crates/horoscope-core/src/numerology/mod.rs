//! Numerology: digit reduction and the numbers built on it.

mod profile;
mod reduce;

pub use profile::{
    expression, letter_value, life_path, personal_day, personal_month, personal_year,
    personality, soul_urge, NumerologyProfile,
};
pub use reduce::{digit_sum, is_master, reduce, reduce_strict, ReductionResult};
