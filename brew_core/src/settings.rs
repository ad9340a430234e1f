//! # Brewing Settings
//!
//! Constants that depend on equipment and ingredients rather than physics.
//! Defaults reproduce the fixed values used by [`crate::equations`].
//!
//! Settings are plain JSON:
//!
//! ```json
//! {
//!   "mash_thermal_constant": 0.2,
//!   "grain_displacement": 1.32,
//!   "default_water_to_grain_qt_per_lb": 1.25
//! }
//! ```
//!
//! Missing fields take their default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::equations::mash::{GRAIN_DISPLACEMENT, MASH_THERMAL_CONSTANT};
use crate::errors::{require_positive, BrewError, BrewResult};

/// Equipment and ingredient constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewSettings {
    /// Strike water thermal constant (0.2 for qt/lb)
    pub mash_thermal_constant: f64,

    /// Grain volume factor, set by the crush of the grain
    pub grain_displacement: f64,

    /// Mash thickness used when a mash input gives no water volume (qt/lb)
    pub default_water_to_grain_qt_per_lb: f64,
}

impl Default for BrewSettings {
    fn default() -> Self {
        BrewSettings {
            mash_thermal_constant: MASH_THERMAL_CONSTANT,
            grain_displacement: GRAIN_DISPLACEMENT,
            default_water_to_grain_qt_per_lb: 1.25,
        }
    }
}

impl BrewSettings {
    /// Validate that every constant is finite and positive.
    pub fn validate(&self) -> BrewResult<()> {
        require_positive("mash_thermal_constant", self.mash_thermal_constant)?;
        require_positive("grain_displacement", self.grain_displacement)?;
        require_positive("default_water_to_grain_qt_per_lb", self.default_water_to_grain_qt_per_lb)?;
        Ok(())
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json_str(json: &str) -> BrewResult<Self> {
        let settings: BrewSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Load settings from a JSON file.
///
/// # Errors
///
/// * `BrewError::FileError` - The file could not be read
/// * `BrewError::SerializationError` - The contents are not valid settings JSON
/// * `BrewError::InvalidInput` - A constant is not positive
pub fn load_settings(path: &Path) -> BrewResult<BrewSettings> {
    let json = fs::read_to_string(path)
        .map_err(|e| BrewError::file_error("read", path.display().to_string(), e.to_string()))?;
    let settings = BrewSettings::from_json_str(&json)?;
    tracing::debug!(path = %path.display(), ?settings, "loaded brew settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_equation_constants() {
        let settings = BrewSettings::default();
        assert_eq!(settings.mash_thermal_constant, 0.2);
        assert_eq!(settings.grain_displacement, 1.32);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = BrewSettings::from_json_str(r#"{ "grain_displacement": 1.4 }"#).unwrap();
        assert_eq!(settings.grain_displacement, 1.4);
        assert_eq!(settings.mash_thermal_constant, 0.2);
    }

    #[test]
    fn test_rejects_non_positive_constant() {
        let err = BrewSettings::from_json_str(r#"{ "mash_thermal_constant": 0.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = BrewSettings::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = load_settings(Path::new("/nonexistent/brew_settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("brew_settings_test_{}.json", std::process::id()));
        fs::write(&path, r#"{ "default_water_to_grain_qt_per_lb": 1.5 }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.default_water_to_grain_qt_per_lb, 1.5);
    }
}
