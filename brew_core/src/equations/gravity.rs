//! # Gravity Adjustment Formulas
//!
//! Hydrometer temperature correction and blending of two worts.

/// Correct a hydrometer reading for sample temperature.
///
/// Valid for a standard brewing hydrometer calibrated at 60°F.
///
/// # Formula
/// ```text
/// ΔSG = (1.313454 − 0.132674·T + 0.002057793·T² − 0.000002627634·T³) / 1000
/// SG  = measured + ΔSG
/// ```
///
/// # Arguments
/// * `wort_temp_f` - Sample temperature (°F)
/// * `measured_sg` - Hydrometer reading (SG)
#[inline]
pub fn hydrometer_correction(wort_temp_f: f64, measured_sg: f64) -> f64 {
    let t = wort_temp_f;
    let conversion = (1.313454 - (0.132674 * t) + (0.002057793 * t * t) - (0.000002627634 * t * t * t)) / 1000.0;
    conversion + measured_sg
}

/// Gravity after mixing two worts (or wort and water, SG 1.000).
///
/// Gravity points are averaged weighted by volume.
///
/// # Formula
/// SG = (((SG1 − 1)·V1 + (SG2 − 1)·V2) / (V1 + V2)) + 1
///
/// # Example
/// ```rust
/// use brew_core::equations::gravity::dilution_new_sg;
///
/// // 5 gal at 1.060 topped up with 1 gal of water
/// let sg = dilution_new_sg(1.060, 5.0, 1.000, 1.0);
/// assert!((sg - 1.050).abs() < 1e-12);
/// ```
#[inline]
pub fn dilution_new_sg(wort1_sg: f64, wort1_vol: f64, wort2_sg: f64, wort2_vol: f64) -> f64 {
    ((((wort1_sg - 1.0) * wort1_vol) + ((wort2_sg - 1.0) * wort2_vol)) / (wort1_vol + wort2_vol)) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_near_calibration_temperature() {
        let sg = hydrometer_correction(60.0, 1.050);
        assert!((sg - 1.050).abs() < 0.001);
    }

    #[test]
    fn test_correction_hot_sample_reads_higher() {
        let sg = hydrometer_correction(100.0, 1.050);
        assert!(sg > 1.050);
        // ΔSG at 100°F ≈ 0.0060
        assert!((sg - 1.0558).abs() < 0.0005);
    }

    #[test]
    fn test_dilution_with_water() {
        let sg = dilution_new_sg(1.060, 5.0, 1.000, 1.0);
        assert!((sg - 1.050).abs() < 1e-12);
    }

    #[test]
    fn test_dilution_same_gravity() {
        let sg = dilution_new_sg(1.045, 3.0, 1.045, 2.0);
        assert!((sg - 1.045).abs() < 1e-12);
    }

    #[test]
    fn test_dilution_zero_volume_is_nan() {
        assert!(dilution_new_sg(1.050, 0.0, 1.000, 0.0).is_nan());
    }
}
