//! Configuration management for the horoscope engine.
//!
//! Every default equals the published engine constant in [`constants`], so
//! `EngineConfig::default()` reproduces the canonical results. Overrides exist
//! for tests and for deployments that want a different critical threshold.

pub mod constants;
mod sub_configs;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

pub use sub_configs::{BiorhythmConfig, LoggingConfig, LunarConfig, TarotConfig};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub biorhythm: BiorhythmConfig,
    #[serde(default)]
    pub lunar: LunarConfig,
    #[serde(default)]
    pub tarot: TarotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{HOROSCOPE_ENV}.toml (environment-specific)
    /// 3. Environment variables with HOROSCOPE__ prefix
    pub fn load() -> EngineResult<Self> {
        let env = std::env::var("HOROSCOPE_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("HOROSCOPE")
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(env = %env, "engine configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| EngineError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> EngineResult<()> {
        let threshold = self.biorhythm.critical_threshold;
        if !threshold.is_finite()
            || threshold <= 0.0
            || threshold >= constants::biorhythm::AMPLITUDE
        {
            return Err(EngineError::ConfigError(format!(
                "biorhythm.critical_threshold must be in (0, 100), got {}",
                threshold
            )));
        }

        let month = self.lunar.synodic_month;
        if !month.is_finite() || month <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "lunar.synodic_month must be positive, got {}",
                month
            )));
        }

        if self.tarot.deck_size == 0 || self.tarot.deck_size > constants::seed::DECK_SIZE {
            return Err(EngineError::ConfigError(format!(
                "tarot.deck_size must be in 1..={}, got {}",
                constants::seed::DECK_SIZE,
                self.tarot.deck_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_matches_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.biorhythm.critical_threshold, 5.0);
        assert_eq!(config.lunar.synodic_month, 29.530_588_67);
        assert_eq!(config.lunar.reference_new_moon.to_rfc3339(), "2024-01-11T11:57:00+00:00");
        assert_eq!(config.tarot.deck_size, 78);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let mut config = EngineConfig::default();
        config.biorhythm.critical_threshold = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("critical_threshold"));
    }

    #[test]
    fn test_validate_rejects_negative_month() {
        let mut config = EngineConfig::default();
        config.lunar.synodic_month = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_deck_size() {
        let mut config = EngineConfig::default();
        config.tarot.deck_size = 0;
        assert!(config.validate().is_err());
        config.tarot.deck_size = 79;
        assert!(config.validate().is_err());
        config.tarot.deck_size = 22;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[biorhythm]\ncritical_threshold = 7.5\n").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.biorhythm.critical_threshold, 7.5);
        // Untouched sections fall back to defaults.
        assert_eq!(config.tarot.deck_size, 78);
        assert_eq!(config.lunar, LunarConfig::default());
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tarot]\ndeck_size = 0\n").unwrap();
        assert!(EngineConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = EngineConfig::from_file(std::path::Path::new("/nonexistent/horoscope.toml"))
            .unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_reference_new_moon_parses_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[lunar]\nreference_new_moon = \"2000-01-06T18:14:00Z\"\n"
        )
        .unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lunar.reference_new_moon.timestamp(), 947_182_440);
    }
}
