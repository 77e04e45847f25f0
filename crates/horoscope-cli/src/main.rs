//! Horoscope CLI
//!
//! Command-line front end for the horoscope computation engine. Every command
//! prints one JSON document on stdout; logs go to stderr.
//!
//! # Commands
//!
//! - `biorhythm`: cycle values for a day or a series of days
//! - `critical`: critical days in the next 30 days
//! - `period`: 7- or 30-day summary
//! - `lunar`: moon phase for a date
//! - `calendar`: lunar phases for a calendar month
//! - `numerology`: numerology profile
//! - `tarot`: daily card or spread with lucky numbers
//! - `compat`: compatibility of two birth dates
//! - `zodiac`: sun sign for a birth date
//!
//! Exit codes: 0 on success, 1 on failure, 2 on invalid input.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use horoscope_core::EngineConfig;
use serde_json::Value;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

use commands::Context;
use error::{exit_code_for_error, CliExitCode};

#[derive(Parser, Debug)]
#[command(name = "horoscope")]
#[command(version)]
#[command(about = "Deterministic biorhythm, lunar, numerology and tarot computations")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Engine configuration file (TOML). Without it, config/default.toml,
    /// config/$HOROSCOPE_ENV.toml and HOROSCOPE__* variables are used.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Biorhythm cycle values
    Biorhythm(commands::biorhythm::BiorhythmArgs),
    /// Critical days in the 30-day window
    Critical(commands::biorhythm::CriticalArgs),
    /// Best days and averages over 7 or 30 days
    Period(commands::biorhythm::PeriodArgs),
    /// Moon phase and illumination
    Lunar(commands::lunar::LunarArgs),
    /// Lunar phase of every day in a month
    Calendar(commands::lunar::CalendarArgs),
    /// Numerology profile
    Numerology(commands::numerology::NumerologyArgs),
    /// Daily tarot card or spread
    Tarot(commands::tarot::TarotArgs),
    /// Compatibility of two birth dates
    Compat(commands::compat::CompatArgs),
    /// Sun sign
    Zodiac(commands::zodiac::ZodiacArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::load()?,
    };
    Ok(config)
}

fn init_logging(verbose: u8, config_level: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(config_level))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(command: &Commands, ctx: &Context) -> Result<Value> {
    use commands::*;

    match command {
        Commands::Biorhythm(args) => biorhythm::handle_biorhythm(args, ctx),
        Commands::Critical(args) => biorhythm::handle_critical(args, ctx),
        Commands::Period(args) => biorhythm::handle_period(args, ctx),
        Commands::Lunar(args) => lunar::handle_lunar(args, ctx),
        Commands::Calendar(args) => lunar::handle_calendar(args, ctx),
        Commands::Numerology(args) => numerology::handle_numerology(args, ctx),
        Commands::Tarot(args) => tarot::handle_tarot(args, ctx),
        Commands::Compat(args) => compat::handle_compat(args, ctx),
        Commands::Zodiac(args) => zodiac::handle_zodiac(args, ctx),
    }
}

fn run(cli: &Cli, ctx: &Context) -> Result<()> {
    let value = dispatch(&cli.command, ctx)?;
    let out = if cli.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{}", out);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return exit_code_for_error(&e).into();
        }
    };
    init_logging(cli.verbose, &config.logging.level);

    let ctx = Context::new(config, Utc::now().date_naive());
    match run(&cli, &ctx) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e).into()
        }
    }
}
