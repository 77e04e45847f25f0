//! Biorhythm commands
//!
//! # Commands
//!
//! - `biorhythm`: cycle values for one day, or a series of days
//! - `critical`: critical days in the 30-day window
//! - `period`: best days and averages over 7 or 30 days

use anyhow::{Context as _, Result};
use clap::Args;
use horoscope_core::validation::RangeLength;
use horoscope_core::{BiorhythmCalculator, ContentLookup, EngineError, PeriodAggregator};
use serde_json::{json, Value};
use tracing::info;

use super::Context;

/// Longest series the `biorhythm` command will print.
const MAX_SERIES_DAYS: u32 = 366;

#[derive(Args, Debug)]
pub struct BiorhythmArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: String,

    /// Target date, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print this many consecutive days starting at the target date (1-366)
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CriticalArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: String,

    /// First day of the window, defaults to today
    #[arg(short, long)]
    pub start: Option<String>,
}

#[derive(Args, Debug)]
pub struct PeriodArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: String,

    /// First day of the range, defaults to today
    #[arg(short, long)]
    pub start: Option<String>,

    /// Range length in days (7 or 30)
    #[arg(long, default_value_t = 7)]
    pub days: u32,
}

pub fn handle_biorhythm(args: &BiorhythmArgs, ctx: &Context) -> Result<Value> {
    let calc = BiorhythmCalculator::new(&ctx.config.biorhythm);
    let birth = ctx.birth(&args.birth)?;
    let date = ctx.target(birth, args.date.as_deref())?;

    let value = match args.days {
        None => {
            let day = calc.daily(birth, date);
            let keywords: Vec<&str> = day
                .critical_cycles()
                .into_iter()
                .filter_map(|c| ctx.content.cycle(c))
                .collect();
            json!({ "day": day, "critical_keywords": keywords })
        }
        Some(days) => {
            if days == 0 || days > MAX_SERIES_DAYS {
                return Err(EngineError::validation(
                    "days",
                    format!("must be between 1 and {}, got {}", MAX_SERIES_DAYS, days),
                )
                .into());
            }
            json!({ "series": calc.series(birth, date, days) })
        }
    };

    info!(%birth, %date, "biorhythm computed");
    Ok(value)
}

pub fn handle_critical(args: &CriticalArgs, ctx: &Context) -> Result<Value> {
    let agg = PeriodAggregator::from_config(&ctx.config);
    let birth = ctx.birth(&args.birth)?;
    let start = ctx.target(birth, args.start.as_deref())?;
    let window = RangeLength::CriticalWindow;

    let days = agg.find_critical(birth, start, window.days());
    info!(%birth, %start, found = days.len(), "critical days computed");
    Ok(json!({
        "start": start,
        "days": window.days(),
        "critical_days": days,
    }))
}

pub fn handle_period(args: &PeriodArgs, ctx: &Context) -> Result<Value> {
    let agg = PeriodAggregator::from_config(&ctx.config);
    let birth = ctx.birth(&args.birth)?;
    let start = ctx.target(birth, args.start.as_deref())?;
    let range = RangeLength::from_days(args.days).context("period length")?;

    let summary = agg.aggregate(birth, start, range.days());
    info!(%birth, %start, days = range.days(), "period aggregated");
    Ok(serde_json::to_value(summary)?)
}
