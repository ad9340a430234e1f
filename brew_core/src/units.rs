//! # Unit Types and Converters
//!
//! Type-safe wrappers for brewing units plus the plain `f64` converters they
//! are built on. The wrappers are lightweight newtypes that serialize as bare
//! numbers.
//!
//! ## Units
//!
//! - Temperature: degrees Fahrenheit (°F), degrees Celsius (°C)
//! - Gravity: specific gravity (SG, dimensionless), degrees Plato (°P)
//! - Volume: US gallons (gal), liters (L)
//! - Mass: US ounces (oz), grams (g), US pounds (lb)
//! - Pressure: pounds per square inch (psi)
//!
//! The SG/Plato pair uses empirical polynomial fits, so converting there and
//! back is only approximately the identity. All other pairs are linear.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::units::{Celsius, Fahrenheit, Gallons, Liters};
//!
//! let boil: Celsius = Fahrenheit(212.0).into();
//! assert_eq!(boil.0, 100.0);
//!
//! let batch: Liters = Gallons(5.0).into();
//! assert!((batch.0 - 18.927).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Liters per US gallon
pub const LITERS_PER_GALLON: f64 = 3.78541178;

/// Grams per US ounce (weight)
pub const GRAMS_PER_OUNCE: f64 = 28.3495;

/// US ounces per gram
pub const OUNCES_PER_GRAM: f64 = 0.0352739619;

// ============================================================================
// Converters
// ============================================================================

/// Convert a temperature from Fahrenheit to Celsius: `(5/9)(F - 32)`
#[inline]
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// Convert a temperature from Celsius to Fahrenheit: `C·9/5 + 32`
#[inline]
pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

/// Convert specific gravity to degrees Plato.
///
/// # Formula
/// °P = -463.37 + 668.72·SG - 205.35·SG²
///
/// ```rust
/// use brew_core::units::sg_to_plato;
///
/// assert!((sg_to_plato(1.050) - 12.4).abs() < 0.2);
/// ```
#[inline]
pub fn sg_to_plato(sg: f64) -> f64 {
    -463.37 + (668.72 * sg) - (205.35 * (sg * sg))
}

/// Convert degrees Plato to specific gravity.
///
/// # Formula
/// SG = 0.00002·°P² + 0.0037·°P + 1.0007
#[inline]
pub fn plato_to_sg(plato: f64) -> f64 {
    (0.00002 * (plato * plato)) + (0.0037 * plato) + 1.0007
}

/// Convert US gallons to liters
#[inline]
pub fn gallons_to_liters(gal: f64) -> f64 {
    gal * LITERS_PER_GALLON
}

/// Convert liters to US gallons
#[inline]
pub fn liters_to_gallons(liter: f64) -> f64 {
    liter / LITERS_PER_GALLON
}

/// Convert US ounces (weight) to grams
#[inline]
pub fn ounces_to_grams(ounce: f64) -> f64 {
    ounce * GRAMS_PER_OUNCE
}

/// Convert grams to US ounces (weight)
#[inline]
pub fn grams_to_ounces(gram: f64) -> f64 {
    gram * OUNCES_PER_GRAM
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius(fahrenheit_to_celsius(f.0))
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(celsius_to_fahrenheit(c.0))
    }
}

// ============================================================================
// Gravity Units
// ============================================================================

/// Specific gravity relative to water (1.000)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificGravity(pub f64);

/// Gravity in degrees Plato
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plato(pub f64);

impl From<SpecificGravity> for Plato {
    fn from(sg: SpecificGravity) -> Self {
        Plato(sg_to_plato(sg.0))
    }
}

impl From<Plato> for SpecificGravity {
    fn from(p: Plato) -> Self {
        SpecificGravity(plato_to_sg(p.0))
    }
}

impl SpecificGravity {
    /// Gravity points, e.g. 1.050 → 50
    pub fn points(self) -> f64 {
        (self.0 - 1.0) * 1000.0
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Gallons> for Liters {
    fn from(gal: Gallons) -> Self {
        Liters(gallons_to_liters(gal.0))
    }
}

impl From<Liters> for Gallons {
    fn from(l: Liters) -> Self {
        Gallons(liters_to_gallons(l.0))
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in US ounces
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ounces(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in US pounds (grain bills)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Ounces> for Grams {
    fn from(oz: Ounces) -> Self {
        Grams(ounces_to_grams(oz.0))
    }
}

impl From<Grams> for Ounces {
    fn from(g: Grams) -> Self {
        Ounces(grams_to_ounces(g.0))
    }
}

impl From<Pounds> for Ounces {
    fn from(lb: Pounds) -> Self {
        Ounces(lb.0 * 16.0)
    }
}

impl From<Ounces> for Pounds {
    fn from(oz: Ounces) -> Self {
        Pounds(oz.0 / 16.0)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Gauge pressure in pounds per square inch (regulator setting)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Fahrenheit);
impl_arithmetic!(Celsius);
impl_arithmetic!(SpecificGravity);
impl_arithmetic!(Plato);
impl_arithmetic!(Gallons);
impl_arithmetic!(Liters);
impl_arithmetic!(Ounces);
impl_arithmetic!(Grams);
impl_arithmetic!(Pounds);
impl_arithmetic!(Psi);
