//! # Mash Calculation
//!
//! Strike water temperature and total mash volume for a single infusion.
//!
//! ## Assumptions
//!
//! - US customary units (lb, gal, °F)
//! - Mash thickness is derived from the water volume, or taken from
//!   [`BrewSettings::default_water_to_grain_qt_per_lb`] when no volume is given
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::mash::{calculate, MashInput};
//! use brew_core::settings::BrewSettings;
//!
//! let input = MashInput {
//!     label: "Single infusion".to_string(),
//!     grain_weight_lb: 10.0,
//!     water_volume_gal: Some(3.125),
//!     grain_temp_f: 70.0,
//!     target_mash_temp_f: 152.0,
//! };
//! let result = calculate(&input, &BrewSettings::default()).unwrap();
//! assert!((result.strike_temp_f - 165.12).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::mash::{mash_total_volume_with_displacement, strike_temperature_with_constant};
use crate::errors::{require_finite, require_positive, BrewResult};
use crate::settings::BrewSettings;

/// Quarts per US gallon
const QUARTS_PER_GALLON: f64 = 4.0;

/// Input parameters for a single infusion mash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MashInput {
    /// User label for this mash
    pub label: String,

    /// Grain bill in pounds
    pub grain_weight_lb: f64,

    /// Mash water in US gallons; `None` uses the default mash thickness
    #[serde(default)]
    pub water_volume_gal: Option<f64>,

    /// Grain temperature before striking (°F)
    pub grain_temp_f: f64,

    /// Desired mash rest temperature (°F)
    pub target_mash_temp_f: f64,
}

impl MashInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        require_positive("grain_weight_lb", self.grain_weight_lb)?;
        if let Some(water) = self.water_volume_gal {
            require_positive("water_volume_gal", water)?;
        }
        require_finite("grain_temp_f", self.grain_temp_f)?;
        require_finite("target_mash_temp_f", self.target_mash_temp_f)?;
        Ok(())
    }

    /// Mash water volume (gal), falling back to the configured thickness
    pub fn water_volume_gal(&self, settings: &BrewSettings) -> f64 {
        self.water_volume_gal.unwrap_or_else(|| {
            self.grain_weight_lb * settings.default_water_to_grain_qt_per_lb / QUARTS_PER_GALLON
        })
    }
}

/// Results from the mash calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MashResult {
    /// Mash water used (gal)
    pub water_volume_gal: f64,

    /// Mash thickness (qt/lb)
    pub water_to_grain_ratio: f64,

    /// Strike water temperature (°F)
    pub strike_temp_f: f64,

    /// Total mash volume of grain and water (gal)
    pub total_volume_gal: f64,
}

/// Calculate strike temperature and mash volume.
pub fn calculate(input: &MashInput, settings: &BrewSettings) -> BrewResult<MashResult> {
    input.validate()?;
    settings.validate()?;

    let water_volume_gal = input.water_volume_gal(settings);
    let water_to_grain_ratio = water_volume_gal * QUARTS_PER_GALLON / input.grain_weight_lb;

    let strike_temp_f = strike_temperature_with_constant(
        settings.mash_thermal_constant,
        water_to_grain_ratio,
        input.grain_temp_f,
        input.target_mash_temp_f,
    );
    let total_volume_gal =
        mash_total_volume_with_displacement(settings.grain_displacement, input.grain_weight_lb, water_volume_gal);

    tracing::debug!(
        label = %input.label,
        ratio = water_to_grain_ratio,
        strike_temp_f,
        "mash calculated"
    );

    Ok(MashResult {
        water_volume_gal,
        water_to_grain_ratio,
        strike_temp_f,
        total_volume_gal,
    })
}
