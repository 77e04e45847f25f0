//! Compatibility command
//!
//! Scores two birth dates with the biorhythm, zodiac and numerology
//! strategies. `--kind` narrows the output to one of them.

use anyhow::Result;
use clap::{Args, ValueEnum};
use horoscope_core::compatibility::{
    biorhythm_compatibility, numerology_compatibility, zodiac_compatibility, CompatibilityScore,
};
use horoscope_core::numerology::life_path;
use horoscope_core::{BiorhythmCalculator, ContentLookup, ZodiacSign};
use serde_json::{json, Map, Value};
use tracing::info;

use super::Context;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompatKind {
    All,
    Biorhythm,
    Zodiac,
    Numerology,
}

#[derive(Args, Debug)]
pub struct CompatArgs {
    /// First birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_a: String,

    /// Second birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_b: String,

    /// Date for the biorhythm comparison, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(long, value_enum, default_value_t = CompatKind::All)]
    pub kind: CompatKind,
}

pub fn handle_compat(args: &CompatArgs, ctx: &Context) -> Result<Value> {
    let a = ctx.birth(&args.birth_a)?;
    let b = ctx.birth(&args.birth_b)?;
    let wants = |kind: CompatKind| args.kind == CompatKind::All || args.kind == kind;

    let mut scores: Vec<(&str, CompatibilityScore)> = Vec::new();
    if wants(CompatKind::Biorhythm) {
        let date = ctx.target(a.max(b), args.date.as_deref())?;
        let calc = BiorhythmCalculator::new(&ctx.config.biorhythm);
        scores.push(("biorhythm", biorhythm_compatibility(&calc, a, b, date)));
    }
    if wants(CompatKind::Zodiac) {
        scores.push((
            "zodiac",
            zodiac_compatibility(ZodiacSign::from_date(a), ZodiacSign::from_date(b)),
        ));
    }
    if wants(CompatKind::Numerology) {
        scores.push(("numerology", numerology_compatibility(life_path(a), life_path(b))));
    }

    let mut out = Map::new();
    for (name, score) in scores {
        info!(kind = name, overall = score.overall, "compatibility scored");
        out.insert(
            name.to_string(),
            json!({ "keyword": ctx.content.rating(score.rating), "score": score }),
        );
    }
    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_utils::context;

    fn args(kind: CompatKind) -> CompatArgs {
        CompatArgs {
            birth_a: "1988-04-02".into(),
            birth_b: "1988-04-02".into(),
            date: Some("2024-01-01".into()),
            kind,
        }
    }

    #[test]
    fn test_all_kinds() {
        let value = handle_compat(&args(CompatKind::All), &context()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(value["biorhythm"]["score"]["overall"], 100.0);
        assert_eq!(value["biorhythm"]["keyword"], "harmonious");
    }

    #[test]
    fn test_single_kind() {
        let value = handle_compat(&args(CompatKind::Zodiac), &context()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("zodiac"));
    }

    #[test]
    fn test_date_before_later_birth_rejected() {
        let mut a = args(CompatKind::Biorhythm);
        a.birth_b = "2000-01-01".into();
        a.date = Some("1999-01-01".into());
        assert!(handle_compat(&a, &context()).is_err());
    }
}
