//! Tarot command

use anyhow::Result;
use clap::Args;
use horoscope_core::seed::lucky_numbers;
use horoscope_core::validation::validate_identity;
use horoscope_core::TarotReader;
use serde_json::{json, Value};
use tracing::info;

use super::Context;

#[derive(Args, Debug)]
pub struct TarotArgs {
    /// Opaque identity key (user id, email, ...)
    #[arg(short, long)]
    pub identity: String,

    /// Date of the draw, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Draw a past/present/future spread instead of a single card
    #[arg(long)]
    pub spread: bool,
}

pub fn handle_tarot(args: &TarotArgs, ctx: &Context) -> Result<Value> {
    let identity = validate_identity(&args.identity)?;
    let date = ctx.date_or_today(args.date.as_deref())?;
    let reader = TarotReader::new(&ctx.config.tarot);

    let draw = if args.spread {
        json!({ "spread": reader.three_card_spread(date, identity) })
    } else {
        json!({ "card": reader.daily_card(date, identity) })
    };

    info!(%date, spread = args.spread, "tarot drawn");
    Ok(json!({
        "date": date,
        "draw": draw,
        "lucky_numbers": lucky_numbers(date, identity),
    }))
}
