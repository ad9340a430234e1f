//! # Extract and Attenuation Formulas
//!
//! All gravities in this module are in degrees Plato.
//!
//! Apparent attenuation (AA) is what a hydrometer shows directly and is the
//! figure yeast suppliers publish. Real attenuation (RA) corrects for the
//! alcohol present, which being lighter than water skews the FG reading low,
//! so RA is always lower than AA for the same beer.

/// Real extract: residual solids after correcting for alcohol.
///
/// # Formula
/// RE = 0.188 × OG + 0.8192 × FG
#[inline]
pub fn real_extract(og_p: f64, fg_p: f64) -> f64 {
    0.188 * og_p + 0.8192 * fg_p
}

/// Apparent attenuation in percent.
///
/// # Formula
/// AA = (1 − FG / OG) × 100
///
/// # Example
/// ```rust
/// use brew_core::equations::attenuation::apparent_attenuation;
///
/// assert!((apparent_attenuation(12.0, 3.0) - 75.0).abs() < 1e-9);
/// ```
#[inline]
pub fn apparent_attenuation(og_p: f64, fg_p: f64) -> f64 {
    (1.0 - (fg_p / og_p)) * 100.0
}

/// Real attenuation in percent.
///
/// # Formula
/// RA = (1 − RE / OG) × 100
#[inline]
pub fn real_attenuation(og_p: f64, real_extract_p: f64) -> f64 {
    (1.0 - (real_extract_p / og_p)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_extract() {
        // 0.188*12 + 0.8192*3 = 2.256 + 2.4576
        assert!((real_extract(12.0, 3.0) - 4.7136).abs() < 1e-12);
    }

    #[test]
    fn test_real_below_apparent() {
        let og = 12.0;
        let fg = 3.0;
        let re = real_extract(og, fg);
        assert!(real_attenuation(og, re) < apparent_attenuation(og, fg));
    }

    #[test]
    fn test_real_attenuation() {
        assert!((real_attenuation(12.0, 4.7136) - 60.72).abs() < 1e-9);
    }

    #[test]
    fn test_zero_og_is_not_finite() {
        assert!(!apparent_attenuation(0.0, 3.0).is_finite());
    }
}
