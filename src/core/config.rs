//! Scenario configuration
//!
//! A scenario is the only input the model takes: two land security burdens
//! and a run length. Everything else about the world is fixed by the
//! archetype table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SeaPowerError};

/// Default burden of the land power (a continental state with hostile borders)
pub const DEFAULT_LAND_POWER_BURDEN: f64 = 0.5;

/// Default burden of the sea power (an island that needs almost no army)
pub const DEFAULT_SEA_POWER_BURDEN: f64 = 0.05;

/// Default run length in steps
pub const DEFAULT_STEPS: u32 = 60;

/// Configuration for a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Fraction of the land power's investable budget spent on land defense
    ///
    /// Below 0.1 the land power considers its borders safe and switches to a
    /// total-war naval program at step 15.
    pub land_power_burden: f64,

    /// Fraction of the sea power's investable budget spent on land defense
    pub sea_power_burden: f64,

    /// Number of steps to simulate
    pub steps: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            land_power_burden: DEFAULT_LAND_POWER_BURDEN,
            sea_power_burden: DEFAULT_SEA_POWER_BURDEN,
            steps: DEFAULT_STEPS,
        }
    }
}

impl ScenarioConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a scenario from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScenarioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        check_burden("land_power_burden", self.land_power_burden)?;
        check_burden("sea_power_burden", self.sea_power_burden)?;

        if self.steps == 0 {
            return Err(SeaPowerError::InvalidConfig(
                "steps must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

fn check_burden(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(SeaPowerError::InvalidConfig(format!(
            "{} ({}) must be within [0, 1]",
            name, value
        )));
    }
    Ok(())
}

/// Clamp a burden into [0, 1]. Non-finite input collapses to 0.
pub fn clamp_burden(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
