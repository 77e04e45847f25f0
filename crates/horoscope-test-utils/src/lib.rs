//! Shared fixtures for horoscope engine tests and benches.
//!
//! Generators take an explicit seed so failures reproduce.

mod fixtures;

pub use fixtures::{
    date, known_birth_dates, random_birth_date, random_birth_dates, random_date_after,
    random_identity, random_name, seeded_rng, FIXTURE_SEED,
};
