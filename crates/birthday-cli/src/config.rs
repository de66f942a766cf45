//! Simulation configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults for `birthday` runs, loaded from .birthday/config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of buckets (days in the year)
    #[serde(default = "default_days")]
    pub days: usize,

    /// Number of people to place
    #[serde(default = "default_people")]
    pub people: usize,

    /// Fixed seed; absent means seed from the wall clock
    pub seed: Option<i64>,

    /// Emit JSON instead of the text calendar
    pub json: bool,

    /// Throttle replay settings
    #[serde(default)]
    pub throttle: ThrottleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Window size in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: f64,
}

fn default_days() -> usize {
    365
}
fn default_people() -> usize {
    23
}
fn default_window_ms() -> f64 {
    1000.0
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            people: default_people(),
            seed: None,
            json: false,
            throttle: ThrottleConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from project root (looks for .birthday/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".birthday/config.yaml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimulationConfig::load_from_project(dir.path()).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.days, 365);
        assert_eq!(config.people, 23);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".birthday")).unwrap();
        std::fs::write(
            dir.path().join(".birthday/config.yaml"),
            "people: 50\nseed: 1234\nthrottle:\n  window_ms: 16\n",
        )
        .unwrap();

        let config = SimulationConfig::load_from_project(dir.path()).unwrap();
        assert_eq!(config.people, 50);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.days, 365);
        assert_eq!(config.throttle.window_ms, 16.0);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".birthday")).unwrap();
        std::fs::write(dir.path().join(".birthday/config.yaml"), "days: [oops").unwrap();

        let err = SimulationConfig::load_from_project(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("config.yaml"));
    }
}
