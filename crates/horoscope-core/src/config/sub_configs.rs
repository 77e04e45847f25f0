//! Per-component configuration sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constants::{biorhythm, lunar, seed};

/// Biorhythm cycle settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BiorhythmConfig {
    /// A cycle is critical while `|value|` is below this.
    pub critical_threshold: f64,
}

impl Default for BiorhythmConfig {
    fn default() -> Self {
        Self {
            critical_threshold: biorhythm::CRITICAL_THRESHOLD,
        }
    }
}

/// Lunar phase settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LunarConfig {
    /// Length of the synodic month in days.
    pub synodic_month: f64,
    /// Known new moon every phase is offset from.
    pub reference_new_moon: DateTime<Utc>,
}

impl Default for LunarConfig {
    fn default() -> Self {
        Self {
            synodic_month: lunar::SYNODIC_MONTH,
            reference_new_moon: crate::cycle::lunar::reference_new_moon(),
        }
    }
}

/// Tarot draw settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TarotConfig {
    /// Number of cards eligible for the daily draw.
    pub deck_size: u32,
}

impl Default for TarotConfig {
    fn default() -> Self {
        Self {
            deck_size: seed::DECK_SIZE,
        }
    }
}

/// Logging settings consumed by binaries when installing a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
