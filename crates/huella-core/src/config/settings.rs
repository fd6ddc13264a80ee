use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{FactorTable, DEFAULT_BASELINE_FACTOR};

/// User-adjustable configuration, persisted as `config.json` in the data
/// directory. The factor table and baseline can be edited there to swap
/// in regional emission data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// User attributed to recorded actions when no override is given.
    pub default_user: String,
    /// Baseline emission factor in kg CO₂ per km.
    pub factor_baseline: f64,
    pub factors: FactorTable,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        if settings.factor_baseline < 0.0 {
            return Err(CoreError::Config(
                "factor_baseline must be non-negative".to_string(),
            ));
        }
        Ok(settings)
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Default settings for `huella init`.
    pub fn default_init() -> Self {
        Self {
            default_user: "local".to_string(),
            factor_baseline: DEFAULT_BASELINE_FACTOR,
            factors: FactorTable::default(),
        }
    }
}
