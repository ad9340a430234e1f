//! # Brewing Equations
//!
//! The raw brewing formulas, grouped by concern. Every function here is a
//! pure `f64` transform: nothing is validated, and division by zero or other
//! out-of-domain inputs simply produce `inf`/`NaN`. The validated entry points
//! live in [`crate::calculations`].
//!
//! ## Modules
//!
//! - [`alcohol`] - Alcohol by volume/weight and calorie estimate
//! - [`attenuation`] - Real extract, apparent and real attenuation
//! - [`mash`] - Strike water temperature and total mash volume
//! - [`gravity`] - Hydrometer temperature correction and dilution blending
//! - [`carbonation`] - Forced and natural carbonation, priming sugar substitution
//!
//! ## Units
//!
//! Gravities are specific gravity (SG) unless the argument name ends in `_p`
//! (degrees Plato). Temperatures are °F, volumes US gallons unless noted.
//!
//! ## References
//!
//! - John Palmer, *How to Brew*, 3rd ed.
//! - Hydrometer correction: HBD brewery library, HydromCorr0992
//! - SG/Plato fit: hbd.org/ensmingr

pub mod alcohol;
pub mod attenuation;
pub mod carbonation;
pub mod gravity;
pub mod mash;

// Re-export commonly used items
pub use alcohol::{calories, percent_alcohol_by_volume, percent_alcohol_by_weight};
pub use attenuation::{apparent_attenuation, real_attenuation, real_extract};
pub use carbonation::{co2_forced_psi, co2_natural_priming_sugar, dissolved_co2_volumes, priming_sugar_substitute};
pub use gravity::{dilution_new_sg, hydrometer_correction};
pub use mash::{mash_total_volume, strike_temperature};
