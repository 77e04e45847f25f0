//! Lunar commands
//!
//! # Commands
//!
//! - `lunar`: phase, illumination and upcoming phase starts for a date
//! - `calendar`: phase of every day in a month

use anyhow::Result;
use chrono::Datelike;
use clap::Args;
use horoscope_core::validation::{max_date, min_date};
use horoscope_core::{ContentLookup, EngineError, LunarCalculator, PeriodAggregator};
use serde_json::{json, Value};
use tracing::info;

use super::Context;

const MAX_UPCOMING: usize = 64;

#[derive(Args, Debug)]
pub struct LunarArgs {
    /// Date to evaluate at midnight UTC, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Also list this many upcoming phase starts (0-64)
    #[arg(long, default_value_t = 0)]
    pub upcoming: usize,

    /// Only list new, first-quarter, full and last-quarter starts
    #[arg(long)]
    pub principal: bool,
}

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Calendar year
    #[arg(short, long)]
    pub year: i32,

    /// Calendar month (1-12)
    #[arg(short, long)]
    pub month: u32,
}

pub fn handle_lunar(args: &LunarArgs, ctx: &Context) -> Result<Value> {
    if args.upcoming > MAX_UPCOMING {
        return Err(EngineError::validation(
            "upcoming",
            format!("must be at most {}, got {}", MAX_UPCOMING, args.upcoming),
        )
        .into());
    }

    let calc = LunarCalculator::new(&ctx.config.lunar);
    let date = ctx.date_or_today(args.date.as_deref())?;
    let sample = calc.evaluate_date(date);
    let upcoming = calc.upcoming_phases(sample.instant, args.upcoming, args.principal);

    info!(%date, phase = %sample.phase, "lunar phase computed");
    Ok(json!({
        "keyword": ctx.content.phase(sample.phase),
        "sample": sample,
        "upcoming": upcoming,
    }))
}

pub fn handle_calendar(args: &CalendarArgs, ctx: &Context) -> Result<Value> {
    if !(1..=12).contains(&args.month) {
        return Err(EngineError::validation(
            "month",
            format!("must be between 1 and 12, got {}", args.month),
        )
        .into());
    }
    let (min_year, max_year) = (min_date().year(), max_date().year());
    if !(min_year..=max_year).contains(&args.year) {
        return Err(EngineError::validation(
            "year",
            format!("must be between {} and {}, got {}", min_year, max_year, args.year),
        )
        .into());
    }

    let days = PeriodAggregator::from_config(&ctx.config).lunar_calendar(args.year, args.month);
    info!(year = args.year, month = args.month, "lunar calendar computed");
    Ok(json!({
        "year": args.year,
        "month": args.month,
        "days": days,
    }))
}
