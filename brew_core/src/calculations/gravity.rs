//! # Gravity Adjustment
//!
//! Corrects a hydrometer reading for sample temperature and, optionally,
//! predicts the gravity after blending in water or another wort.

use serde::{Deserialize, Serialize};

use crate::equations::gravity::{dilution_new_sg, hydrometer_correction};
use crate::errors::{require_finite, require_positive, BrewResult};
use crate::units::sg_to_plato;

/// A second liquid blended into the measured wort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DilutionInput {
    /// Volume of the measured wort (gal)
    pub wort_volume_gal: f64,

    /// Gravity of the addition (1.000 for water)
    pub addition_sg: f64,

    /// Volume of the addition (gal)
    pub addition_volume_gal: f64,
}

/// Input parameters for a gravity adjustment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pre-boil",
///   "measured_sg": 1.042,
///   "sample_temp_f": 120.0,
///   "dilution": { "wort_volume_gal": 6.5, "addition_sg": 1.0, "addition_volume_gal": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravityAdjustmentInput {
    /// User label
    pub label: String,

    /// Hydrometer reading (SG)
    pub measured_sg: f64,

    /// Sample temperature (°F)
    pub sample_temp_f: f64,

    /// Optional blend applied after correction
    #[serde(default)]
    pub dilution: Option<DilutionInput>,
}

impl GravityAdjustmentInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        require_positive("measured_sg", self.measured_sg)?;
        require_finite("sample_temp_f", self.sample_temp_f)?;
        if let Some(dilution) = &self.dilution {
            require_positive("wort_volume_gal", dilution.wort_volume_gal)?;
            require_positive("addition_sg", dilution.addition_sg)?;
            require_positive("addition_volume_gal", dilution.addition_volume_gal)?;
        }
        Ok(())
    }
}

/// Results from a gravity adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravityAdjustmentResult {
    /// Temperature-corrected gravity (SG)
    pub corrected_sg: f64,

    /// Temperature-corrected gravity (°P)
    pub corrected_plato: f64,

    /// Gravity after blending (SG), when a dilution was given
    pub blended_sg: Option<f64>,

    /// Volume after blending (gal), when a dilution was given
    pub blended_volume_gal: Option<f64>,
}

/// Correct the reading and apply the optional blend.
pub fn calculate(input: &GravityAdjustmentInput) -> BrewResult<GravityAdjustmentResult> {
    input.validate()?;

    let corrected_sg = hydrometer_correction(input.sample_temp_f, input.measured_sg);

    let (blended_sg, blended_volume_gal) = match &input.dilution {
        Some(d) => (
            Some(dilution_new_sg(corrected_sg, d.wort_volume_gal, d.addition_sg, d.addition_volume_gal)),
            Some(d.wort_volume_gal + d.addition_volume_gal),
        ),
        None => (None, None),
    };

    tracing::debug!(label = %input.label, corrected_sg, blended_sg = ?blended_sg, "gravity adjusted");

    Ok(GravityAdjustmentResult {
        corrected_sg,
        corrected_plato: sg_to_plato(corrected_sg),
        blended_sg,
        blended_volume_gal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_sample() -> GravityAdjustmentInput {
        GravityAdjustmentInput {
            label: "Pre-boil".to_string(),
            measured_sg: 1.042,
            sample_temp_f: 120.0,
            dilution: None,
        }
    }

    #[test]
    fn test_correction_only() {
        let result = calculate(&hot_sample()).unwrap();
        assert_eq!(result.corrected_sg, hydrometer_correction(120.0, 1.042));
        assert!(result.corrected_sg > 1.042);
        assert!(result.blended_sg.is_none());
    }

    #[test]
    fn test_blend_uses_corrected_gravity() {
        let mut input = hot_sample();
        input.dilution = Some(DilutionInput {
            wort_volume_gal: 6.5,
            addition_sg: 1.000,
            addition_volume_gal: 0.5,
        });
        let result = calculate(&input).unwrap();
        let expected = dilution_new_sg(result.corrected_sg, 6.5, 1.000, 0.5);
        assert_eq!(result.blended_sg, Some(expected));
        assert_eq!(result.blended_volume_gal, Some(7.0));
        assert!(expected < result.corrected_sg);
    }

    #[test]
    fn test_invalid_dilution_volume() {
        let mut input = hot_sample();
        input.dilution = Some(DilutionInput {
            wort_volume_gal: 0.0,
            addition_sg: 1.000,
            addition_volume_gal: 0.0,
        });
        assert!(calculate(&input).is_err());
    }
}
