//! Run settings
//!
//! Settings come from an optional TOML file and may be overridden by
//! command-line flags:
//!
//! ```toml
//! warmup = 2
//! repetitions = 10
//! ```

use crate::error::HarnessError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// How many times the kernel runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Untimed runs before measuring
    pub warmup: u32,
    /// Timed runs; must be at least 1
    pub repetitions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            warmup: 0,
            repetitions: 1,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document
    pub fn from_toml(toml_str: &str) -> Result<Self, HarnessError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_toml(&content)
    }

    pub fn with_warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.repetitions == 0 {
            return Err(HarnessError::Settings(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
