//! # Carbonation Formulas
//!
//! - **Forced**: keg "set it and forget it" carbonation, where beer
//!   temperature and regulator pressure equilibrate over 5-10 days.
//! - **Natural**: bottle conditioning with priming sugar (dextrose / corn
//!   sugar), typically 10-14 days at room temperature.
//!
//! ## Notation
//!
//! - `T` = Beer temperature (°F)
//! - `V` = Target volumes of CO2

/// Extract yield of corn sugar (ppg), the reference for substitutions
pub const CORN_SUGAR_YIELD_PPG: f64 = 42.0;

/// Fraction of corn sugar (dextrose monohydrate) mass that is fermentable sugar
pub const CORN_SUGAR_PURITY: f64 = 0.91;

/// Regulator pressure (psi) needed to reach `vol_co2` at `temp_f`.
///
/// # Formula
/// ```text
/// P = −16.6999 − 0.0101059·T + 0.00116512·T² + 0.173354·T·V + 4.24267·V − 0.0684226·V²
/// ```
///
/// # Example
/// ```rust
/// use brew_core::equations::carbonation::co2_forced_psi;
///
/// // 2.5 volumes at 38°F needs roughly 11 psi
/// let psi = co2_forced_psi(38.0, 2.5);
/// assert!((psi - 11.25).abs() < 0.1);
/// ```
#[inline]
pub fn co2_forced_psi(temp_f: f64, vol_co2: f64) -> f64 {
    let t = temp_f;
    let v = vol_co2;
    -16.6999 - (0.0101059 * t) + (0.00116512 * t * t) + (0.173354 * t * v) + (4.24267 * v) - (0.0684226 * v * v)
}

/// Volumes of CO2 already dissolved in beer that has finished fermenting at
/// `temp_f`.
///
/// # Formula
/// CO2 = 3.0378 − 0.050062·T + 0.00026555·T²
#[inline]
pub fn dissolved_co2_volumes(temp_f: f64) -> f64 {
    3.0378 - (0.050062 * temp_f) + (0.00026555 * temp_f * temp_f)
}

/// Grams of corn sugar to prime `batch_size_liters` of beer to `vol_co2`.
///
/// # Formula
/// ```text
/// g = ((V·2 − CO2·2) · 2 · L) / 0.91
/// ```
/// where CO2 is [`dissolved_co2_volumes`].
#[inline]
pub fn co2_natural_priming_sugar(temp_f: f64, vol_co2: f64, batch_size_liters: f64) -> f64 {
    let current_co2 = dissolved_co2_volumes(temp_f);
    (((vol_co2 * 2.0) - (current_co2 * 2.0)) * 2.0 * batch_size_liters) / CORN_SUGAR_PURITY
}

/// Mass (oz) of another priming sugar equivalent to `mass_corn_sugar_oz` of
/// corn sugar.
///
/// # Formula (Palmer, *How to Brew*, p. 111)
/// oz = (corn sugar oz × 42) / (yield × fermentability)
///
/// # Arguments
/// * `mass_corn_sugar_oz` - Corn sugar mass for the target carbonation (oz)
/// * `extract_yield_ppg` - Extract yield of the substitute (ppg)
/// * `fermentability` - Fermentable fraction of the substitute (0-1)
#[inline]
pub fn priming_sugar_substitute(mass_corn_sugar_oz: f64, extract_yield_ppg: f64, fermentability: f64) -> f64 {
    (mass_corn_sugar_oz * CORN_SUGAR_YIELD_PPG) / (extract_yield_ppg * fermentability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced() {
        let t: f64 = 38.0;
        let v: f64 = 2.5;
        let expected = -16.6999 - 0.0101059 * t + 0.00116512 * t * t + 0.173354 * t * v + 4.24267 * v
            - 0.0684226 * v * v;
        assert!((co2_forced_psi(t, v) - expected).abs() < 1e-12);
        assert!((co2_forced_psi(t, v) - 11.246).abs() < 0.01);
    }

    #[test]
    fn test_forced_warmer_needs_more_pressure() {
        assert!(co2_forced_psi(50.0, 2.5) > co2_forced_psi(38.0, 2.5));
    }

    #[test]
    fn test_natural() {
        let grams = co2_natural_priming_sugar(68.0, 2.5, 19.0);
        let current = 3.0378 - 0.050062 * 68.0 + 0.00026555 * 68.0 * 68.0;
        let expected = ((2.5 * 2.0 - current * 2.0) * 2.0 * 19.0) / 0.91;
        assert!(grams > 0.0);
        assert!((grams - expected).abs() < 1e-9);
        assert!((grams - 136.84).abs() < 0.01);
    }

    #[test]
    fn test_dissolved_co2() {
        // 68°F beer holds about 0.86 volumes
        assert!((dissolved_co2_volumes(68.0) - 0.8615).abs() < 0.0001);
    }

    #[test]
    fn test_corn_sugar_substitutes_one_for_one() {
        assert!((priming_sugar_substitute(4.0, 42.0, 1.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_less_fermentable_sugar_needs_more_mass() {
        // Dry malt extract: 44 ppg, ~75% fermentable
        let dme = priming_sugar_substitute(4.0, 44.0, 0.75);
        assert!((dme - 4.0 * 42.0 / 33.0).abs() < 1e-12);
        assert!(dme > 4.0);
    }
}
