//! Folds of the cycle evaluators over date ranges.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::{lunar_month_calendar, LunarCalendarDay};
use crate::config::EngineConfig;
use crate::cycle::{days_since_origin, round2, BiorhythmCalculator, Cycle, LunarCalculator};

/// How many cycles are critical on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// 1 → low, 2 → medium, 3 or more → high. `None` when nothing is critical.
    pub fn from_count(critical_cycles: usize) -> Option<Self> {
        match critical_cycles {
            0 => None,
            1 => Some(Severity::Low),
            2 => Some(Severity::Medium),
            _ => Some(Severity::High),
        }
    }
}

/// One day with at least one critical cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalDayInfo {
    pub date: NaiveDate,
    pub critical_cycles: Vec<Cycle>,
    pub severity: Severity,
    pub triple_critical: bool,
}

/// Aggregate over `[start, start + days)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub start: NaiveDate,
    pub days: u32,
    /// First date on which each cycle reached its maximum.
    pub best_date_per_category: BTreeMap<Cycle, NaiveDate>,
    /// Value of each cycle on its best date.
    pub best_value_per_category: BTreeMap<Cycle, f64>,
    /// Days with at least one critical cycle.
    pub critical_day_count: u32,
    pub average_per_category: BTreeMap<Cycle, f64>,
    /// Mean of all three cycles over the whole range.
    pub overall_average: f64,
}

/// Running state of one aggregation. All fields are unrounded.
struct Fold {
    best: [(f64, Option<NaiveDate>); 3],
    sums: [f64; 3],
    critical_days: u32,
}

impl Fold {
    fn new() -> Self {
        Self {
            best: [(f64::NEG_INFINITY, None); 3],
            sums: [0.0; 3],
            critical_days: 0,
        }
    }

    fn push(&mut self, date: NaiveDate, raw: [f64; 3], any_critical: bool) {
        for (i, value) in raw.iter().enumerate() {
            // strictly greater: the first occurrence keeps ties
            if *value > self.best[i].0 {
                self.best[i] = (*value, Some(date));
            }
            self.sums[i] += value;
        }
        if any_critical {
            self.critical_days += 1;
        }
    }
}

/// Iterates the cycle evaluators over date ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodAggregator {
    calculator: BiorhythmCalculator,
    lunar: LunarCalculator,
}

impl PeriodAggregator {
    pub fn new(calculator: BiorhythmCalculator, lunar: LunarCalculator) -> Self {
        Self { calculator, lunar }
    }

    /// Create from configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            BiorhythmCalculator::new(&config.biorhythm),
            LunarCalculator::new(&config.lunar),
        )
    }

    pub fn calculator(&self) -> &BiorhythmCalculator {
        &self.calculator
    }

    /// Lunar phase of every day of a calendar month.
    ///
    /// # Panics
    /// Panics if `month` is not in `1..=12`.
    pub fn lunar_calendar(&self, year: i32, month: u32) -> Vec<LunarCalendarDay> {
        lunar_month_calendar(&self.lunar, year, month)
    }

    /// Dates in `[start, start + days)`.
    fn dates(start: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
        (0..days as i64).map(move |offset| start + Duration::days(offset))
    }

    /// Names of the cycles critical for these unrounded values.
    fn critical_cycles(&self, raw: &[f64; 3]) -> Vec<Cycle> {
        Cycle::ALL
            .into_iter()
            .filter(|c| self.calculator.definition(*c).is_critical(raw[c.index()]))
            .collect()
    }

    /// Best day, averages and critical-day count for `days` days from `start`.
    ///
    /// # Panics
    /// Panics if `days` is zero or `start` precedes `birth`.
    pub fn aggregate(&self, birth: NaiveDate, start: NaiveDate, days: u32) -> PeriodSummary {
        assert!(days > 0, "period length must be at least one day");

        let mut fold = Fold::new();
        for date in Self::dates(start, days) {
            let raw = self
                .calculator
                .raw_values(days_since_origin(birth, date) as f64);
            let any_critical = !self.critical_cycles(&raw).is_empty();
            fold.push(date, raw, any_critical);
        }

        let n = days as f64;
        let mut best_date_per_category = BTreeMap::new();
        let mut best_value_per_category = BTreeMap::new();
        let mut average_per_category = BTreeMap::new();
        for cycle in Cycle::ALL {
            let i = cycle.index();
            let (best_value, best_date) = fold.best[i];
            if let Some(best_date) = best_date {
                best_date_per_category.insert(cycle, best_date);
                best_value_per_category.insert(cycle, round2(best_value));
            }
            average_per_category.insert(cycle, round2(fold.sums[i] / n));
        }

        tracing::debug!(
            %start,
            days,
            critical_days = fold.critical_days,
            "biorhythm period aggregated"
        );

        PeriodSummary {
            start,
            days,
            best_date_per_category,
            best_value_per_category,
            critical_day_count: fold.critical_days,
            average_per_category,
            overall_average: round2(fold.sums.iter().sum::<f64>() / (n * fold.sums.len() as f64)),
        }
    }

    /// Every day in the range with at least one critical cycle.
    ///
    /// Uses [`crate::cycle::CycleDefinition::is_critical`], the same predicate
    /// as the single-day evaluation, so a day flagged here is always flagged
    /// by [`BiorhythmCalculator::daily`] and vice versa.
    ///
    /// # Panics
    /// Panics if `days` is zero or `start` precedes `birth`.
    pub fn find_critical(
        &self,
        birth: NaiveDate,
        start: NaiveDate,
        days: u32,
    ) -> Vec<CriticalDayInfo> {
        assert!(days > 0, "period length must be at least one day");

        Self::dates(start, days)
            .filter_map(|date| {
                let raw = self
                    .calculator
                    .raw_values(days_since_origin(birth, date) as f64);
                let critical_cycles = self.critical_cycles(&raw);
                Severity::from_count(critical_cycles.len()).map(|severity| CriticalDayInfo {
                    date,
                    triple_critical: critical_cycles.len() == Cycle::ALL.len(),
                    critical_cycles,
                    severity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BiorhythmConfig;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_aggregate_week() {
        let agg = PeriodAggregator::default();
        let summary = agg.aggregate(date(1990, 1, 1), date(1990, 1, 1), 7);

        assert_eq!(summary.days, 7);
        assert_eq!(summary.best_date_per_category.len(), 3);
        // All cycles rise during the first week; the last day is best.
        for cycle in Cycle::ALL {
            assert_eq!(summary.best_date_per_category[&cycle], date(1990, 1, 7));
        }
        // Only the birth day itself is critical (physical day 1 is ≈ 27).
        assert_eq!(summary.critical_day_count, 1);
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        let mut fold = Fold::new();
        fold.push(date(2024, 1, 1), [50.0, 10.0, -5.0], false);
        fold.push(date(2024, 1, 2), [50.0, 20.0, -5.0], false);
        fold.push(date(2024, 1, 3), [49.0, 20.0, -6.0], true);

        assert_eq!(fold.best[0], (50.0, Some(date(2024, 1, 1))));
        assert_eq!(fold.best[1], (20.0, Some(date(2024, 1, 2))));
        assert_eq!(fold.best[2], (-5.0, Some(date(2024, 1, 1))));
        assert_eq!(fold.critical_days, 1);
        assert_eq!(fold.sums, [149.0, 50.0, -16.0]);
    }

    #[test]
    fn test_averages_match_series() {
        let agg = PeriodAggregator::default();
        let birth = date(1975, 8, 14);
        let start = date(2024, 4, 1);
        let summary = agg.aggregate(birth, start, 30);

        let t0 = days_since_origin(birth, start) as f64;
        for cycle in Cycle::ALL {
            let def = agg.calculator().definition(cycle);
            let mean: f64 = (0..30).map(|i| def.raw_value(t0 + i as f64)).sum::<f64>() / 30.0;
            assert_eq!(summary.average_per_category[&cycle], round2(mean));
        }
    }

    #[test]
    fn test_find_critical_agrees_with_daily() {
        let agg = PeriodAggregator::default();
        let birth = date(1993, 10, 9);
        let start = date(2024, 1, 1);
        let critical = agg.find_critical(birth, start, 120);
        let summary = agg.aggregate(birth, start, 120);

        assert_eq!(critical.len() as u32, summary.critical_day_count);

        let series = agg.calculator().series(birth, start, 120);
        let flagged: Vec<NaiveDate> = series
            .iter()
            .filter(|d| d.critical_day)
            .map(|d| d.date)
            .collect();
        let found: Vec<NaiveDate> = critical.iter().map(|c| c.date).collect();
        assert_eq!(flagged, found);

        for info in &critical {
            let day = agg.calculator().daily(birth, info.date);
            assert_eq!(info.critical_cycles, day.critical_cycles());
            assert_eq!(info.triple_critical, day.triple_critical);
        }
    }

    #[test]
    fn test_birth_day_is_high_severity() {
        let agg = PeriodAggregator::default();
        let birth = date(2001, 2, 3);
        let critical = agg.find_critical(birth, birth, 1);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].severity, Severity::High);
        assert!(critical[0].triple_critical);
    }

    #[test]
    fn test_severity_buckets() {
        assert_eq!(Severity::from_count(0), None);
        assert_eq!(Severity::from_count(1), Some(Severity::Low));
        assert_eq!(Severity::from_count(2), Some(Severity::Medium));
        assert_eq!(Severity::from_count(3), Some(Severity::High));
    }

    #[test]
    fn test_wider_threshold_finds_more_days() {
        let narrow = PeriodAggregator::default();
        let wide = PeriodAggregator::new(
            BiorhythmCalculator::new(&BiorhythmConfig {
                critical_threshold: 20.0,
            }),
            LunarCalculator::default(),
        );
        let birth = date(1984, 6, 6);
        let start = date(2024, 6, 6);
        let wide_count = wide.find_critical(birth, start, 30).len();
        let narrow_count = narrow.find_critical(birth, start, 30).len();
        assert!(wide_count > narrow_count);
    }

    #[test]
    fn test_lunar_calendar_delegates() {
        let agg = PeriodAggregator::from_config(&EngineConfig::default());
        let days = agg.lunar_calendar(2024, 1);
        assert_eq!(days.len(), 31);
        assert_eq!(days, lunar_month_calendar(&LunarCalculator::default(), 2024, 1));
    }

    #[test]
    #[should_panic(expected = "at least one day")]
    fn test_zero_days_panics() {
        PeriodAggregator::default().aggregate(date(2000, 1, 1), date(2000, 1, 1), 0);
    }
}
