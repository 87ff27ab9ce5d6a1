//! Planner configuration.
//!
//! Walking pace and stair time are tunable through a small TOML file. Lookup
//! order: explicit path, then `HALLWAY_CONFIG`, then `hallway.toml` in the
//! working directory. No file means defaults.

use crate::core::error::HallwayError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "HALLWAY_CONFIG";
pub const CONFIG_FILE_NAME: &str = "hallway.toml";

/// Estimated distance between adjacent rooms.
pub const DEFAULT_FEET_PER_UNIT: f64 = 30.0;
/// Roughly 4 mph, a brisk student pace.
pub const DEFAULT_WALKING_SPEED_FEET_PER_MINUTE: f64 = 350.0;
pub const DEFAULT_STAIR_MINUTES_PER_FLOOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub feet_per_unit: f64,
    pub walking_speed_feet_per_minute: f64,
    pub stair_minutes_per_floor: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            feet_per_unit: DEFAULT_FEET_PER_UNIT,
            walking_speed_feet_per_minute: DEFAULT_WALKING_SPEED_FEET_PER_MINUTE,
            stair_minutes_per_floor: DEFAULT_STAIR_MINUTES_PER_FLOOR,
        }
    }
}

impl PlannerConfig {
    pub fn from_toml_str(content: &str) -> Result<PlannerConfig, HallwayError> {
        let config: PlannerConfig =
            toml::from_str(content).map_err(|e| HallwayError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HallwayError> {
        let fields = [
            ("feet_per_unit", self.feet_per_unit),
            (
                "walking_speed_feet_per_minute",
                self.walking_speed_feet_per_minute,
            ),
            ("stair_minutes_per_floor", self.stair_minutes_per_floor),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(HallwayError::ConfigError(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.walking_speed_feet_per_minute == 0.0 {
            return Err(HallwayError::ConfigError(
                "walking_speed_feet_per_minute must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Minutes needed to walk one grid unit.
    pub fn minutes_per_unit(&self) -> f64 {
        self.feet_per_unit / self.walking_speed_feet_per_minute
    }
}

/// Pick the config file to read, if any.
pub fn config_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let local = working_dir.join(CONFIG_FILE_NAME);
    local.exists().then_some(local)
}

/// Load planner settings. An explicitly named file must exist; the implicit
/// `hallway.toml` is optional.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<PlannerConfig, HallwayError> {
    let Some(path) = config_path(explicit, working_dir) else {
        return Ok(PlannerConfig::default());
    };
    let content = fs::read_to_string(&path).map_err(|e| {
        HallwayError::ConfigError(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = PlannerConfig::from_toml_str(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded planner config");
    Ok(config)
}
