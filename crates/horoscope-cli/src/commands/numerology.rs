//! Numerology command

use anyhow::Result;
use clap::Args;
use horoscope_core::numerology::NumerologyProfile;
use horoscope_core::validation::validate_name;
use horoscope_core::ContentLookup;
use serde_json::{json, Value};
use tracing::info;

use super::Context;

#[derive(Args, Debug)]
pub struct NumerologyArgs {
    /// Full birth name
    #[arg(short, long)]
    pub name: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: String,

    /// Date for the personal year and day numbers, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

pub fn handle_numerology(args: &NumerologyArgs, ctx: &Context) -> Result<Value> {
    let name = validate_name(&args.name)?;
    let birth = ctx.birth(&args.birth)?;
    let date = ctx.target(birth, args.date.as_deref())?;

    let profile = NumerologyProfile::compute(name, birth, date);
    info!(%birth, life_path = profile.life_path.value, "numerology profile computed");
    Ok(json!({
        "life_path_keyword": ctx.content.number(profile.life_path),
        "profile": profile,
    }))
}
