use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GtoError, GtoResult};

/// Caller-side defaults. The engine never reads these itself; front ends pass
/// the iteration counts into each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub equity_iterations: usize,
    pub gto_iterations: usize,
    pub show_equity_percentage: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            equity_iterations: 1000,
            gto_iterations: 1000,
            show_equity_percentage: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> GtoResult<Settings> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> GtoResult<Settings> {
        let path = path.as_ref();
        log::debug!("loading settings from {}", path.display());
        Settings::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> GtoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> GtoResult<()> {
        if self.equity_iterations == 0 || self.gto_iterations == 0 {
            return Err(GtoError::ZeroIterations);
        }
        Ok(())
    }
}
