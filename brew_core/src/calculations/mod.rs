//! # Brewing Calculations
//!
//! Validated, JSON-friendly wrappers around [`crate::equations`]. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, BrewError>` - Pure calculation function
//!
//! Inputs get basic numeric-range sanity checks (finite, positive where a
//! formula divides by the value). The raw equations stay unguarded.
//!
//! ## Available Calculations
//!
//! - [`fermentation`] - ABV/ABW, extract, attenuation and calories from OG/FG
//! - [`mash`] - Strike temperature and total mash volume
//! - [`carbonation`] - Regulator pressure or priming sugar
//! - [`gravity`] - Hydrometer temperature correction and dilution

pub mod carbonation;
pub mod fermentation;
pub mod gravity;
pub mod mash;

use serde::{Deserialize, Serialize};

use crate::errors::BrewResult;
use crate::settings::BrewSettings;

// Re-export commonly used types
pub use carbonation::{CarbonationInput, CarbonationMethod, CarbonationResult, PrimingSugar};
pub use fermentation::{FermentationInput, FermentationResult};
pub use gravity::{DilutionInput, GravityAdjustmentInput, GravityAdjustmentResult};
pub use mash::{MashInput, MashResult};

/// Enum wrapper for all calculation types.
///
/// Lets callers hold heterogeneous calculations in one collection and
/// dispatch them uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Fermentation report from OG/FG
    Fermentation(FermentationInput),
    /// Single infusion mash
    Mash(MashInput),
    /// Forced or natural carbonation
    Carbonation(CarbonationInput),
    /// Hydrometer correction and dilution
    GravityAdjustment(GravityAdjustmentInput),
}

/// Result of running a [`CalculationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Fermentation(FermentationResult),
    Mash(MashResult),
    Carbonation(CarbonationResult),
    GravityAdjustment(GravityAdjustmentResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Fermentation(f) => &f.label,
            CalculationItem::Mash(m) => &m.label,
            CalculationItem::Carbonation(c) => &c.label,
            CalculationItem::GravityAdjustment(g) => &g.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Fermentation(_) => "Fermentation",
            CalculationItem::Mash(_) => "Mash",
            CalculationItem::Carbonation(_) => "Carbonation",
            CalculationItem::GravityAdjustment(_) => "GravityAdjustment",
        }
    }

    /// Run the calculation
    pub fn run(&self, settings: &BrewSettings) -> BrewResult<CalculationOutput> {
        tracing::trace!(label = self.label(), calc_type = self.calc_type(), "running calculation");
        Ok(match self {
            CalculationItem::Fermentation(input) => CalculationOutput::Fermentation(fermentation::calculate(input)?),
            CalculationItem::Mash(input) => CalculationOutput::Mash(mash::calculate(input, settings)?),
            CalculationItem::Carbonation(input) => CalculationOutput::Carbonation(carbonation::calculate(input)?),
            CalculationItem::GravityAdjustment(input) => {
                CalculationOutput::GravityAdjustment(gravity::calculate(input)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_json() {
        let json = r#"{ "type": "Fermentation", "label": "IPA", "og_sg": 1.065, "fg_sg": 1.012 }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "IPA");
        assert_eq!(item.calc_type(), "Fermentation");

        match item.run(&BrewSettings::default()).unwrap() {
            CalculationOutput::Fermentation(result) => assert!(result.abv_percent > 6.0),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_run_propagates_validation_error() {
        let item = CalculationItem::Mash(MashInput {
            label: "Bad".to_string(),
            grain_weight_lb: -1.0,
            water_volume_gal: None,
            grain_temp_f: 70.0,
            target_mash_temp_f: 152.0,
        });
        assert!(item.run(&BrewSettings::default()).is_err());
    }

    #[test]
    fn test_output_is_tagged() {
        let item = CalculationItem::Carbonation(CarbonationInput {
            label: "Keg".to_string(),
            beer_temp_f: 40.0,
            target_volumes_co2: 2.4,
            method: CarbonationMethod::Forced,
        });
        let output = item.run(&BrewSettings::default()).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"type\":\"Carbonation\""));
    }
}
