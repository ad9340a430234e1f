//! # Mash Formulas
//!
//! Infusion mash helpers in US customary units.
//!
//! ## Notation
//!
//! - `r` = Water-to-grain ratio (qt/lb)
//! - `T1` = Grain temperature before striking (°F)
//! - `T2` = Target mash rest temperature (°F)
//! - `Tw` = Strike water temperature (°F)

/// Thermodynamic constant for quarts and pounds (0.41 for liters and kilograms)
pub const MASH_THERMAL_CONSTANT: f64 = 0.2;

/// Grain volume factor; depends on the crush of the grain
pub const GRAIN_DISPLACEMENT: f64 = 1.32;

/// Strike water temperature using the default thermal constant.
///
/// # Formula (Palmer, *How to Brew*)
/// Tw = (0.2 / r)(T2 − T1) + T2
///
/// # Example
/// ```rust
/// use brew_core::equations::mash::strike_temperature;
///
/// // 1.25 qt/lb, grain at 70°F, 152°F rest
/// let tw = strike_temperature(1.25, 70.0, 152.0);
/// assert!((tw - 165.12).abs() < 1e-9);
/// ```
#[inline]
pub fn strike_temperature(water_ratio: f64, grain_temp_f: f64, mash_target_temp_f: f64) -> f64 {
    strike_temperature_with_constant(MASH_THERMAL_CONSTANT, water_ratio, grain_temp_f, mash_target_temp_f)
}

/// Strike water temperature with an explicit thermal constant.
#[inline]
pub fn strike_temperature_with_constant(
    thermal_constant: f64,
    water_ratio: f64,
    grain_temp_f: f64,
    mash_target_temp_f: f64,
) -> f64 {
    (thermal_constant / water_ratio) * (mash_target_temp_f - grain_temp_f) + mash_target_temp_f
}

/// Total mash volume (gal) including grain and water, default displacement.
///
/// # Formula
/// V = ((grain × 1.32) + (water − grain)) / 4
///
/// # Arguments
/// * `total_grain_lb` - Grain bill (lb)
/// * `total_water_gal` - Mash water (gal)
#[inline]
pub fn mash_total_volume(total_grain_lb: f64, total_water_gal: f64) -> f64 {
    mash_total_volume_with_displacement(GRAIN_DISPLACEMENT, total_grain_lb, total_water_gal)
}

/// Total mash volume (gal) with an explicit grain displacement factor.
#[inline]
pub fn mash_total_volume_with_displacement(displacement: f64, total_grain_lb: f64, total_water_gal: f64) -> f64 {
    ((total_grain_lb * displacement) + (total_water_gal - total_grain_lb)) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_temperature() {
        // (0.2/1.25) * (152 - 70) + 152 = 0.16 * 82 + 152
        let tw = strike_temperature(1.25, 70.0, 152.0);
        assert!((tw - 165.12).abs() < 1e-9);
    }

    #[test]
    fn test_strike_equals_target_when_grain_is_at_target() {
        assert_eq!(strike_temperature(1.5, 152.0, 152.0), 152.0);
    }

    #[test]
    fn test_strike_zero_ratio_is_not_finite() {
        assert!(!strike_temperature(0.0, 70.0, 152.0).is_finite());
    }

    #[test]
    fn test_mash_volume_grain_equals_water() {
        // The (water - grain) term vanishes
        let v = mash_total_volume(10.0, 10.0);
        assert!((v - 10.0 * 1.32 / 4.0).abs() < 1e-12);
        assert!((v - 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_mash_volume() {
        // ((12 * 1.32) + (15 - 12)) / 4 = (15.84 + 3) / 4
        assert!((mash_total_volume(12.0, 15.0) - 4.71).abs() < 1e-12);
    }

    #[test]
    fn test_explicit_constants_match_defaults() {
        assert_eq!(
            strike_temperature_with_constant(MASH_THERMAL_CONSTANT, 1.25, 70.0, 152.0),
            strike_temperature(1.25, 70.0, 152.0)
        );
        assert_eq!(
            mash_total_volume_with_displacement(GRAIN_DISPLACEMENT, 12.0, 15.0),
            mash_total_volume(12.0, 15.0)
        );
    }
}
