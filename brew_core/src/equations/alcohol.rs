//! # Alcohol Content Formulas
//!
//! ## Notation
//!
//! - `OG` = Original gravity (SG)
//! - `FG` = Final gravity (SG)
//! - `ABV` = Percent alcohol by volume
//! - `ABW` = Percent alcohol by weight
//! - `RE` = Real extract (°P)

/// Ratio of ABV to ABW (density of ethanol relative to beer)
pub const ABV_TO_ABW: f64 = 1.267;

/// Percent alcohol by volume from original and final gravity.
///
/// # Formula
/// ABV = (1.05 / 0.79) × ((OG − FG) / FG) × 100
///
/// # Example
/// ```rust
/// use brew_core::equations::alcohol::percent_alcohol_by_volume;
///
/// let abv = percent_alcohol_by_volume(1.050, 1.010);
/// assert!((abv - 5.26).abs() < 0.01);
/// ```
#[inline]
pub fn percent_alcohol_by_volume(og: f64, fg: f64) -> f64 {
    let delta_sg = og - fg;
    (1.05 / 0.79) * (delta_sg / fg) * 100.0
}

/// Percent alcohol by weight from a known ABV.
///
/// # Formula
/// ABW = ABV / 1.267
#[inline]
pub fn percent_alcohol_by_weight(abv: f64) -> f64 {
    abv / ABV_TO_ABW
}

/// Estimated calories in 12 US fl oz of beer.
///
/// # Formula
/// kcal = ((6.9 × ABW) + 4.0 × (RE − 0.1)) × FG × 3.55
///
/// # Arguments
/// * `abw` - Percent alcohol by weight
/// * `real_extract_p` - Real extract (°P)
/// * `fg` - Final gravity (SG)
#[inline]
pub fn calories(abw: f64, real_extract_p: f64, fg: f64) -> f64 {
    ((6.9 * abw) + 4.0 * (real_extract_p - 0.1)) * fg * 3.55
}
