//! Zodiac command

use anyhow::Result;
use clap::Args;
use horoscope_core::{ContentLookup, ZodiacSign};
use serde_json::{json, Value};

use super::Context;

#[derive(Args, Debug)]
pub struct ZodiacArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: String,
}

pub fn handle_zodiac(args: &ZodiacArgs, ctx: &Context) -> Result<Value> {
    let birth = ctx.birth(&args.birth)?;
    let sign = ZodiacSign::from_date(birth);
    Ok(json!({
        "sign": sign,
        "element": sign.element(),
        "modality": sign.modality(),
        "keyword": ctx.content.sign(sign),
    }))
}
