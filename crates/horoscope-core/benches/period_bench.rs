//! Period aggregation benchmark suite
//!
//! Performance targets:
//! - aggregate: <50μs for a 30-day range
//! - find_critical: <50μs for a 30-day range
//! - lunar_month_calendar: <20μs per month

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use horoscope_core::cycle::{BiorhythmCalculator, LunarCalculator};
use horoscope_core::numerology::reduce;
use horoscope_core::period::PeriodAggregator;
use horoscope_core::seed::lucky_numbers;
use horoscope_core::tarot::TarotReader;
use horoscope_test_utils::{date, random_birth_dates, FIXTURE_SEED};

// =============================================================================
// Period Benchmarks
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let agg = PeriodAggregator::default();
    let birth = date(1985, 3, 17);
    let start = date(2024, 1, 1);

    c.bench_function("aggregate_30_days", |b| {
        b.iter(|| agg.aggregate(black_box(birth), black_box(start), 30))
    });
    c.bench_function("find_critical_30_days", |b| {
        b.iter(|| agg.find_critical(black_box(birth), black_box(start), 30))
    });
}

fn bench_aggregate_scaling(c: &mut Criterion) {
    let agg = PeriodAggregator::default();
    let birth = date(1985, 3, 17);
    let start = date(2024, 1, 1);
    let mut group = c.benchmark_group("aggregate_scaling");

    for days in [7u32, 30, 365, 3650] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| agg.aggregate(black_box(birth), black_box(start), days))
        });
    }
    group.finish();
}

fn bench_daily_many_births(c: &mut Criterion) {
    let calc = BiorhythmCalculator::default();
    let births = random_birth_dates(FIXTURE_SEED, 1_000);
    let on = date(2024, 6, 1);

    c.bench_function("daily_1000_births", |b| {
        b.iter(|| {
            births
                .iter()
                .filter(|birth| calc.daily(**birth, black_box(on)).critical_day)
                .count()
        })
    });
}

// =============================================================================
// Lunar Benchmarks
// =============================================================================

fn bench_lunar(c: &mut Criterion) {
    let calc = LunarCalculator::default();
    let agg = PeriodAggregator::default();
    let instant = Utc.with_ymd_and_hms(2031, 5, 4, 18, 30, 0).unwrap();

    c.bench_function("lunar_evaluate", |b| b.iter(|| calc.evaluate(black_box(instant))));
    c.bench_function("lunar_month_calendar", |b| {
        b.iter(|| agg.lunar_calendar(black_box(2024), black_box(7)))
    });
    c.bench_function("upcoming_phases_12", |b| {
        b.iter(|| calc.upcoming_phases(black_box(instant), 12, false))
    });
}

// =============================================================================
// Seeded Benchmarks
// =============================================================================

fn bench_seeded(c: &mut Criterion) {
    let reader = TarotReader::default();
    let on = date(2024, 2, 29);

    c.bench_function("three_card_spread", |b| {
        b.iter(|| reader.three_card_spread(black_box(on), black_box("user-31337")))
    });
    c.bench_function("lucky_numbers", |b| {
        b.iter(|| lucky_numbers(black_box(on + Duration::days(1)), black_box("user-31337")))
    });
    c.bench_function("reduce_u64_max", |b| b.iter(|| reduce(black_box(u64::MAX))));
}

criterion_group!(
    name = period;
    config = Criterion::default();
    targets =
        bench_aggregate,
        bench_daily_many_births,
);

criterion_group!(
    name = scaling;
    config = Criterion::default().sample_size(50);
    targets =
        bench_aggregate_scaling,
);

criterion_group!(
    name = lunar;
    config = Criterion::default();
    targets =
        bench_lunar,
);

criterion_group!(
    name = seeded;
    config = Criterion::default();
    targets =
        bench_seeded,
);

criterion_main!(period, scaling, lunar, seeded);
