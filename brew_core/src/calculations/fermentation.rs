//! # Fermentation Report
//!
//! Derives every post-fermentation figure from a pair of hydrometer readings:
//! gravities in Plato, alcohol content, extract, attenuation and calories.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::fermentation::{calculate, FermentationInput};
//!
//! let input = FermentationInput {
//!     label: "Pale Ale".to_string(),
//!     og_sg: 1.050,
//!     fg_sg: 1.010,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.abv_percent - 5.26).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    apparent_attenuation, calories, percent_alcohol_by_volume, percent_alcohol_by_weight, real_attenuation,
    real_extract,
};
use crate::errors::{require_positive, BrewError, BrewResult};
use crate::units::sg_to_plato;

/// Hydrometer readings before and after fermentation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pale Ale",
///   "og_sg": 1.050,
///   "fg_sg": 1.010
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermentationInput {
    /// User label for this batch
    pub label: String,

    /// Original gravity (SG)
    pub og_sg: f64,

    /// Final gravity (SG)
    pub fg_sg: f64,
}

impl FermentationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        require_positive("fg_sg", self.fg_sg)?;
        require_positive("og_sg", self.og_sg)?;
        if self.og_sg <= 1.0 {
            return Err(BrewError::invalid_input(
                "og_sg",
                self.og_sg.to_string(),
                "Original gravity must be above 1.000",
            ));
        }
        if self.og_sg < self.fg_sg {
            return Err(BrewError::invalid_input(
                "og_sg",
                self.og_sg.to_string(),
                "Original gravity cannot be below final gravity",
            ));
        }
        Ok(())
    }
}

/// Results of the fermentation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermentationResult {
    /// Original gravity (°P)
    pub og_plato: f64,

    /// Final gravity (°P)
    pub fg_plato: f64,

    /// Percent alcohol by volume
    pub abv_percent: f64,

    /// Percent alcohol by weight
    pub abw_percent: f64,

    /// Real extract (°P)
    pub real_extract_plato: f64,

    /// Apparent attenuation (%)
    pub apparent_attenuation_percent: f64,

    /// Real attenuation (%)
    pub real_attenuation_percent: f64,

    /// Estimated calories per 12 US fl oz
    pub calories_per_12oz: f64,
}

/// Calculate the fermentation report.
///
/// # Returns
///
/// * `Ok(FermentationResult)` - Calculation results
/// * `Err(BrewError)` - If the readings are invalid
pub fn calculate(input: &FermentationInput) -> BrewResult<FermentationResult> {
    input.validate()?;

    let og_plato = sg_to_plato(input.og_sg);
    let fg_plato = sg_to_plato(input.fg_sg);

    let abv_percent = percent_alcohol_by_volume(input.og_sg, input.fg_sg);
    let abw_percent = percent_alcohol_by_weight(abv_percent);

    let real_extract_plato = real_extract(og_plato, fg_plato);
    let apparent_attenuation_percent = apparent_attenuation(og_plato, fg_plato);
    let real_attenuation_percent = real_attenuation(og_plato, real_extract_plato);

    let calories_per_12oz = calories(abw_percent, real_extract_plato, input.fg_sg);

    tracing::debug!(
        label = %input.label,
        abv = abv_percent,
        apparent_attenuation = apparent_attenuation_percent,
        "fermentation report calculated"
    );

    Ok(FermentationResult {
        og_plato,
        fg_plato,
        abv_percent,
        abw_percent,
        real_extract_plato,
        apparent_attenuation_percent,
        real_attenuation_percent,
        calories_per_12oz,
    })
}
