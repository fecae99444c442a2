//! Advisor configuration
//!
//! Operational knobs only. Band weights and thresholds are fixed constants in
//! their scoring modules and are not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::spray::DEFAULT_WINDOW_HOURS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Length of the spray window (hours)
    pub spray_window_hours: usize,

    /// Hours covered by a synthetic forecast
    pub forecast_hours: usize,

    /// Seed for synthetic forecasts
    pub forecast_seed: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            spray_window_hours: DEFAULT_WINDOW_HOURS,
            forecast_hours: 24,
            forecast_seed: 42,
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read advisor config: {:?}", path))?;

        let config: AdvisorConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse advisor config JSON")?;

        if config.spray_window_hours == 0 {
            anyhow::bail!("spray_window_hours must be at least 1");
        }

        tracing::info!(
            spray_window_hours = config.spray_window_hours,
            forecast_hours = config.forecast_hours,
            "Loaded advisor config from {:?}",
            path
        );

        Ok(config)
    }

    /// Load from the path in `var` if set, defaults otherwise
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("agri_risk_scorer_{}_{}.json", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let path = write_temp("partial", r#"{"forecast_seed": 7}"#);
        let config = AdvisorConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.forecast_seed, 7);
        assert_eq!(config.spray_window_hours, 3);
        assert_eq!(config.forecast_hours, 24);
    }

    #[test]
    fn test_zero_window_rejected() {
        let path = write_temp("zero", r#"{"spray_window_hours": 0}"#);
        let result = AdvisorConfig::load(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AdvisorConfig::load(Path::new("/nonexistent/advisor.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read advisor config"));
    }

    #[test]
    fn test_unset_env_uses_defaults() {
        let config = AdvisorConfig::from_env("AGRI_RISK_SCORER_TEST_UNSET_VAR").unwrap();
        assert_eq!(config, AdvisorConfig::default());
    }
}
