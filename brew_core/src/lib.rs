//! # brew_core - Home-Brewing Calculation Library
//!
//! `brew_core` provides the arithmetic behind everyday home-brewing: unit
//! conversions and the standard brewing formulas (alcohol content,
//! attenuation, calories, mash water, hydrometer correction, dilution and
//! carbonation).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take numbers and return numbers
//! - **Unguarded equations**: [`equations`] and [`units`] never fail; bad
//!   inputs surface as `inf`/`NaN`
//! - **Validated wrappers**: [`calculations`] adds range checks and
//!   JSON-serializable inputs and results
//! - **No hidden state**: the one cached value (ABV) lives in a caller-owned
//!   [`alcohol::AlcoholContext`]
//!
//! ## Quick Start
//!
//! ```rust
//! use brew_core::equations::{percent_alcohol_by_volume, percent_alcohol_by_weight};
//! use brew_core::units::sg_to_plato;
//!
//! let abv = percent_alcohol_by_volume(1.050, 1.010);
//! let abw = percent_alcohol_by_weight(abv);
//! assert!(abw < abv);
//!
//! let og_plato = sg_to_plato(1.050);
//! assert!((og_plato - 12.4).abs() < 0.2);
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit newtypes and converters
//! - [`equations`] - Raw brewing formulas
//! - [`alcohol`] - Caller-owned ABV cache
//! - [`calculations`] - Validated calculation inputs and results
//! - [`format`] - Display helpers
//! - [`settings`] - Configurable brewing constants
//! - [`errors`] - Structured error types

pub mod alcohol;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod format;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use alcohol::AlcoholContext;
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{BrewError, BrewResult};
pub use format::remove_trailing_zero;
pub use settings::{load_settings, BrewSettings};
