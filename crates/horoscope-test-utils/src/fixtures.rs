//! REAL dates and names: every generated value passes the caller-side
//! validation in `horoscope_core::validation`.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use horoscope_core::validation::min_date;

/// Default seed for fixtures that don't care which values they get.
pub const FIXTURE_SEED: u64 = 0x5EED_2024;

/// Last birth date the generators produce.
const LATEST_BIRTH: (i32, u32, u32) = (2020, 12, 31);

const GIVEN_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances", "Ken", "Margaret", "Niklaus",
];
const FAMILY_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen", "Thompson", "Hamilton",
    "Wirth",
];

/// Shorthand for a known-valid date.
///
/// # Panics
/// Panics on an invalid calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {}-{:02}-{:02}", year, month, day))
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform birth date in `1900-01-01..=2020-12-31`.
pub fn random_birth_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let min = min_date();
    let (y, m, d) = LATEST_BIRTH;
    let span = (date(y, m, d) - min).num_days();
    min + Duration::days(rng.gen_range(0..=span))
}

pub fn random_birth_dates(seed: u64, count: usize) -> Vec<NaiveDate> {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| random_birth_date(&mut rng)).collect()
}

/// A date between `origin` and roughly 100 years later.
pub fn random_date_after<R: Rng>(rng: &mut R, origin: NaiveDate) -> NaiveDate {
    origin + Duration::days(rng.gen_range(0..36_525))
}

/// "Given Family" drawn from a fixed list.
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let given = GIVEN_NAMES.choose(rng).copied().unwrap_or("Ada");
    let family = FAMILY_NAMES.choose(rng).copied().unwrap_or("Lovelace");
    format!("{} {}", given, family)
}

/// Opaque identity such as `user-48213`.
pub fn random_identity<R: Rng>(rng: &mut R) -> String {
    format!("user-{}", rng.gen_range(1..100_000u32))
}

/// Dates with hand-checked results, used as worked examples.
pub fn known_birth_dates() -> Vec<NaiveDate> {
    vec![
        date(1990, 1, 1),
        date(1900, 1, 1),
        date(1969, 7, 20),
        date(2000, 2, 29),
        date(1984, 6, 6),
    ]
}
