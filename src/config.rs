//! Configuration for the Munsell converter.
//!
//! All tunable numerical parameters of the engine live in
//! [`ConverterConfig`]. Configuration can be loaded from JSON files or
//! constructed programmatically:
//!
//! ```no_run
//! use munsell_engine::ConverterConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ConverterConfig::from_json_file(Path::new("munsell.json"))?;
//!
//! // Or use defaults
//! let config = ConverterConfig::default();
//! # Ok::<(), munsell_engine::MunsellError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{munsell, numeric};
use crate::error::{MunsellError, Result};

/// Tunable parameters of the conversion engine.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// config file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Chroma below this collapses to the achromatic axis (N)
    pub mono_limit_chroma: f64,

    /// Newton stopping tolerance for Value inversion, in Y×100 units
    pub value_tolerance: f64,

    /// Iteration cap for the Value inversion
    pub max_value_iterations: usize,

    /// Half width, in hue steps, of the cell window scanned around the
    /// nearest table sample
    pub search_window: i32,

    /// Value distance within which a query is treated as lying on a
    /// table level, so only that level is scanned
    pub level_snap: f64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            mono_limit_chroma: munsell::MONO_LIMIT_C,
            value_tolerance: numeric::VALUE_TOLERANCE,
            max_value_iterations: numeric::MAX_VALUE_ITERATIONS,
            search_window: numeric::SEARCH_WINDOW,
            level_snap: numeric::LEVEL_SNAP,
        }
    }
}

impl ConverterConfig {
    /// Check that every parameter is usable by the engine
    pub fn validate(&self) -> Result<()> {
        if !(self.mono_limit_chroma >= 0.0) {
            return Err(MunsellError::invalid_parameter(
                "mono_limit_chroma",
                self.mono_limit_chroma,
            ));
        }
        if !(self.value_tolerance > 0.0) {
            return Err(MunsellError::invalid_parameter(
                "value_tolerance",
                self.value_tolerance,
            ));
        }
        if self.max_value_iterations == 0 {
            return Err(MunsellError::invalid_parameter(
                "max_value_iterations",
                self.max_value_iterations,
            ));
        }
        if self.search_window < 1 {
            return Err(MunsellError::invalid_parameter(
                "search_window",
                self.search_window,
            ));
        }
        if !(0.0..0.5).contains(&self.level_snap) {
            return Err(MunsellError::invalid_parameter("level_snap", self.level_snap));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MunsellError::config(format!("reading {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| MunsellError::config(format!("parsing {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MunsellError::config("serializing configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| MunsellError::config(format!("writing {}", path.display()), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConverterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ConverterConfig = serde_json::from_str(r#"{"search_window": 8}"#).unwrap();
        assert_eq!(config.search_window, 8);
        assert_eq!(config.mono_limit_chroma, munsell::MONO_LIMIT_C);
        assert_eq!(config.max_value_iterations, numeric::MAX_VALUE_ITERATIONS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ConverterConfig {
            search_window: 0,
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConverterConfig {
            value_tolerance: f64::NAN,
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConverterConfig {
            level_snap: 0.5,
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "munsell_engine_config_{}.json",
            std::process::id()
        ));
        let config = ConverterConfig {
            mono_limit_chroma: 0.1,
            ..ConverterConfig::default()
        };
        config.to_json_file(&path).unwrap();
        let loaded = ConverterConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ConverterConfig::from_json_file(Path::new("/nonexistent/munsell.json")).unwrap_err();
        assert!(matches!(err, MunsellError::ConfigError { .. }));
    }
}
