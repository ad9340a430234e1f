//! # Alcohol Context
//!
//! [`AlcoholContext`] keeps the most recent ABV so that ABW can be asked for
//! from OG/FG alone. Prefer the pure
//! [`percent_alcohol_by_weight`](crate::equations::alcohol::percent_alcohol_by_weight)
//! with an explicit ABV when the caller already holds it.
//!
//! The cache is not keyed by gravity. Once set, ABW uses the stored ABV even if
//! called with different readings, until [`AlcoholContext::clear`] or a new
//! ABV calculation replaces it.
//!
//! The context is owned by the caller and mutated through `&mut self`; sharing
//! one across threads needs the caller's own lock.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::alcohol::AlcoholContext;
//!
//! let mut ctx = AlcoholContext::new();
//! let abv = ctx.percent_alcohol_by_volume(1.050, 1.010);
//! let abw = ctx.percent_alcohol_by_weight(1.050, 1.010);
//! assert_eq!(abw, abv / 1.267);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::alcohol;

/// Caller-owned holder for a cached ABV value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlcoholContext {
    cached_abv: Option<f64>,
}

impl AlcoholContext {
    /// Create a context with no cached value
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached ABV, if one has been computed
    pub fn cached_abv(&self) -> Option<f64> {
        self.cached_abv
    }

    /// Forget the cached ABV
    pub fn clear(&mut self) {
        self.cached_abv = None;
    }

    /// Compute percent ABV and store it in the cache.
    pub fn percent_alcohol_by_volume(&mut self, og: f64, fg: f64) -> f64 {
        let abv = alcohol::percent_alcohol_by_volume(og, fg);
        self.cached_abv = Some(abv);
        abv
    }

    /// Compute percent ABW, computing and caching ABV first if none is cached.
    pub fn percent_alcohol_by_weight(&mut self, og: f64, fg: f64) -> f64 {
        let abv = match self.cached_abv {
            Some(abv) => abv,
            None => self.percent_alcohol_by_volume(og, fg),
        };
        alcohol::percent_alcohol_by_weight(abv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::alcohol::percent_alcohol_by_volume;

    #[test]
    fn test_abw_with_precached_abv() {
        let mut ctx = AlcoholContext::new();
        let abv = ctx.percent_alcohol_by_volume(1.050, 1.010);
        assert_eq!(ctx.cached_abv(), Some(abv));
        assert_eq!(ctx.percent_alcohol_by_weight(1.050, 1.010), abv / 1.267);
    }

    #[test]
    fn test_abw_without_cache_computes_and_caches() {
        let mut ctx = AlcoholContext::new();
        assert_eq!(ctx.cached_abv(), None);

        let abw = ctx.percent_alcohol_by_weight(1.050, 1.010);
        let abv = percent_alcohol_by_volume(1.050, 1.010);
        assert_eq!(abw, abv / 1.267);
        assert_eq!(ctx.cached_abv(), Some(abv));
    }

    #[test]
    fn test_cache_is_reused_for_other_gravities() {
        let mut ctx = AlcoholContext::new();
        let first = ctx.percent_alcohol_by_volume(1.050, 1.010);

        // Different readings still use the cached ABV
        let abw = ctx.percent_alcohol_by_weight(1.080, 1.020);
        assert_eq!(abw, first / 1.267);
    }

    #[test]
    fn test_clear() {
        let mut ctx = AlcoholContext::new();
        ctx.percent_alcohol_by_volume(1.050, 1.010);
        ctx.clear();
        assert_eq!(ctx.cached_abv(), None);

        let abw = ctx.percent_alcohol_by_weight(1.080, 1.020);
        assert_eq!(abw, percent_alcohol_by_volume(1.080, 1.020) / 1.267);
    }

    #[test]
    fn test_serialization() {
        let mut ctx = AlcoholContext::new();
        ctx.percent_alcohol_by_volume(1.050, 1.010);
        let json = serde_json::to_string(&ctx).unwrap();
        let roundtrip: AlcoholContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, roundtrip);
    }
}
