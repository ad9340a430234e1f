//! # Carbonation Calculation
//!
//! Regulator pressure for force carbonation, or priming sugar mass for bottle
//! conditioning with corn sugar or a substitute sugar.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::carbonation::{calculate, CarbonationInput, CarbonationMethod};
//!
//! let input = CarbonationInput {
//!     label: "Keg".to_string(),
//!     beer_temp_f: 38.0,
//!     target_volumes_co2: 2.5,
//!     method: CarbonationMethod::Forced,
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.regulator_psi.unwrap() > 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::carbonation::{
    co2_forced_psi, co2_natural_priming_sugar, dissolved_co2_volumes, priming_sugar_substitute,
    CORN_SUGAR_YIELD_PPG,
};
use crate::errors::{require_finite, require_positive, BrewError, BrewResult};
use crate::units::{grams_to_ounces, ounces_to_grams};

/// A priming sugar described by its extract yield and fermentability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimingSugar {
    /// Display name
    pub name: String,

    /// Extract yield in points per pound per gallon (ppg)
    pub extract_yield_ppg: f64,

    /// Fermentable fraction (0-1)
    pub fermentability: f64,
}

impl PrimingSugar {
    /// Create a priming sugar
    pub fn new(name: impl Into<String>, extract_yield_ppg: f64, fermentability: f64) -> Self {
        PrimingSugar {
            name: name.into(),
            extract_yield_ppg,
            fermentability,
        }
    }

    /// Corn sugar (dextrose), the reference sugar
    pub fn corn_sugar() -> Self {
        Self::new("Corn sugar", CORN_SUGAR_YIELD_PPG, 1.0)
    }

    /// Table sugar (sucrose)
    pub fn table_sugar() -> Self {
        Self::new("Table sugar", 46.0, 1.0)
    }

    /// Dry malt extract
    pub fn dry_malt_extract() -> Self {
        Self::new("Dry malt extract", 44.0, 0.75)
    }

    /// Honey
    pub fn honey() -> Self {
        Self::new("Honey", 38.0, 0.95)
    }

    /// Validate yield and fermentability.
    pub fn validate(&self) -> BrewResult<()> {
        require_positive("extract_yield_ppg", self.extract_yield_ppg)?;
        require_positive("fermentability", self.fermentability)?;
        if self.fermentability > 1.0 {
            return Err(BrewError::invalid_input(
                "fermentability",
                self.fermentability.to_string(),
                "Fermentability is a fraction between 0 and 1",
            ));
        }
        Ok(())
    }
}

impl Default for PrimingSugar {
    fn default() -> Self {
        Self::corn_sugar()
    }
}

/// How the beer is carbonated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum CarbonationMethod {
    /// Keg under constant CO2 pressure
    Forced,
    /// Bottle conditioning with priming sugar
    Natural {
        /// Volume of beer being primed (L)
        batch_size_l: f64,
        /// Sugar to prime with
        #[serde(default)]
        sugar: PrimingSugar,
    },
}

/// Input parameters for a carbonation calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bottling day",
///   "beer_temp_f": 68.0,
///   "target_volumes_co2": 2.5,
///   "method": { "method": "Natural", "batch_size_l": 19.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonationInput {
    /// User label
    pub label: String,

    /// Beer temperature (°F). For natural carbonation, the highest
    /// temperature the beer reached after fermentation finished.
    pub beer_temp_f: f64,

    /// Target carbonation in volumes of CO2
    pub target_volumes_co2: f64,

    /// Forced or natural carbonation
    pub method: CarbonationMethod,
}

impl CarbonationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        require_finite("beer_temp_f", self.beer_temp_f)?;
        require_positive("target_volumes_co2", self.target_volumes_co2)?;
        if let CarbonationMethod::Natural { batch_size_l, sugar } = &self.method {
            require_positive("batch_size_l", *batch_size_l)?;
            sugar.validate()?;
        }
        Ok(())
    }
}

/// Results from a carbonation calculation. Fields that do not apply to the
/// chosen method are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarbonationResult {
    /// Regulator setting (psi), forced only
    pub regulator_psi: Option<f64>,

    /// CO2 already dissolved in the beer (volumes), natural only
    pub residual_volumes_co2: Option<f64>,

    /// Corn sugar needed (g), natural only
    pub corn_sugar_g: Option<f64>,

    /// Corn sugar needed (oz), natural only
    pub corn_sugar_oz: Option<f64>,

    /// Mass of the chosen priming sugar (oz), natural only
    pub priming_sugar_oz: Option<f64>,

    /// Mass of the chosen priming sugar (g), natural only
    pub priming_sugar_g: Option<f64>,
}

impl CarbonationResult {
    /// False when the beer already holds at least the target carbonation
    /// (the priming sugar mass came out zero or negative).
    pub fn needs_priming(&self) -> bool {
        self.corn_sugar_g.is_some_and(|g| g > 0.0)
    }
}

/// Calculate the carbonation settings.
pub fn calculate(input: &CarbonationInput) -> BrewResult<CarbonationResult> {
    input.validate()?;

    let result = match &input.method {
        CarbonationMethod::Forced => CarbonationResult {
            regulator_psi: Some(co2_forced_psi(input.beer_temp_f, input.target_volumes_co2)),
            ..CarbonationResult::default()
        },
        CarbonationMethod::Natural { batch_size_l, sugar } => {
            let corn_sugar_g = co2_natural_priming_sugar(input.beer_temp_f, input.target_volumes_co2, *batch_size_l);
            let corn_sugar_oz = grams_to_ounces(corn_sugar_g);
            let priming_sugar_oz =
                priming_sugar_substitute(corn_sugar_oz, sugar.extract_yield_ppg, sugar.fermentability);

            CarbonationResult {
                regulator_psi: None,
                residual_volumes_co2: Some(dissolved_co2_volumes(input.beer_temp_f)),
                corn_sugar_g: Some(corn_sugar_g),
                corn_sugar_oz: Some(corn_sugar_oz),
                priming_sugar_oz: Some(priming_sugar_oz),
                priming_sugar_g: Some(ounces_to_grams(priming_sugar_oz)),
            }
        }
    };

    tracing::debug!(
        label = %input.label,
        regulator_psi = ?result.regulator_psi,
        corn_sugar_g = ?result.corn_sugar_g,
        "carbonation calculated"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottling(sugar: PrimingSugar) -> CarbonationInput {
        CarbonationInput {
            label: "Bottles".to_string(),
            beer_temp_f: 68.0,
            target_volumes_co2: 2.5,
            method: CarbonationMethod::Natural {
                batch_size_l: 19.0,
                sugar,
            },
        }
    }

    #[test]
    fn test_forced() {
        let input = CarbonationInput {
            label: "Keg".to_string(),
            beer_temp_f: 38.0,
            target_volumes_co2: 2.5,
            method: CarbonationMethod::Forced,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.regulator_psi, Some(co2_forced_psi(38.0, 2.5)));
        assert!(result.corn_sugar_g.is_none());
        assert!(!result.needs_priming());
    }

    #[test]
    fn test_natural_corn_sugar() {
        let result = calculate(&bottling(PrimingSugar::corn_sugar())).unwrap();
        let grams = result.corn_sugar_g.unwrap();
        assert_eq!(grams, co2_natural_priming_sugar(68.0, 2.5, 19.0));
        // Corn sugar substitutes for itself
        assert!((result.priming_sugar_oz.unwrap() - result.corn_sugar_oz.unwrap()).abs() < 1e-12);
        assert!(result.needs_priming());
        assert!(result.regulator_psi.is_none());
    }

    #[test]
    fn test_natural_dme_needs_more() {
        let result = calculate(&bottling(PrimingSugar::dry_malt_extract())).unwrap();
        assert!(result.priming_sugar_oz.unwrap() > result.corn_sugar_oz.unwrap());
    }

    #[test]
    fn test_already_carbonated() {
        let mut input = bottling(PrimingSugar::corn_sugar());
        // Cold beer holds more CO2 than the low target
        input.beer_temp_f = 32.0;
        input.target_volumes_co2 = 1.0;
        let result = calculate(&input).unwrap();
        assert!(!result.needs_priming());
    }

    #[test]
    fn test_invalid_fermentability() {
        let sugar = PrimingSugar::new("Bad", 40.0, 95.0);
        let err = calculate(&bottling(sugar)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_batch_size() {
        let mut input = bottling(PrimingSugar::corn_sugar());
        input.method = CarbonationMethod::Natural {
            batch_size_l: 0.0,
            sugar: PrimingSugar::corn_sugar(),
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_method_json_defaults_to_corn_sugar() {
        let json = r#"{
            "label": "Bottling day",
            "beer_temp_f": 68.0,
            "target_volumes_co2": 2.5,
            "method": { "method": "Natural", "batch_size_l": 19.0 }
        }"#;
        let input: CarbonationInput = serde_json::from_str(json).unwrap();
        match input.method {
            CarbonationMethod::Natural { sugar, .. } => assert_eq!(sugar, PrimingSugar::corn_sugar()),
            CarbonationMethod::Forced => panic!("expected natural carbonation"),
        }
    }
}
