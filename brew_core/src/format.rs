//! # Display Formatting
//!
//! Helpers for turning numbers into short display strings.

use crate::errors::{BrewError, BrewResult};

/// Drop the fractional part of a decimal string when its first fractional
/// digit is `0`.
///
/// Only the digit immediately after the point is inspected. When it is `0`
/// everything from the point onward is removed, even if later digits are
/// non-zero, so `"1.05"` becomes `"1"`. This loses precision for values with
/// more than one decimal place and is meant for one-decimal display values.
///
/// # Errors
///
/// Returns [`BrewError::MalformedNumber`] if the text has no `.` or if nothing
/// follows the `.`.
///
/// # Example
///
/// ```rust
/// use brew_core::format::remove_trailing_zero;
///
/// assert_eq!(remove_trailing_zero("5.0").unwrap(), "5");
/// assert_eq!(remove_trailing_zero("5.25").unwrap(), "5.25");
/// assert_eq!(remove_trailing_zero("5.05").unwrap(), "5"); // lossy
/// assert!(remove_trailing_zero("5").is_err());
/// ```
pub fn remove_trailing_zero(value: &str) -> BrewResult<String> {
    let decimal = value
        .find('.')
        .ok_or_else(|| BrewError::malformed_number(value, "No decimal point"))?;

    match value[decimal + 1..].chars().next() {
        Some('0') => Ok(value[..decimal].to_string()),
        Some(_) => Ok(value.to_string()),
        None => Err(BrewError::malformed_number(value, "No digit after decimal point")),
    }
}

/// Format a value with a fixed number of decimals, then trim it with
/// [`remove_trailing_zero`].
///
/// With `decimals == 0` or a non-finite value the plain formatted text is
/// returned, since there is no fractional digit to inspect.
///
/// ```rust
/// use brew_core::format::format_value;
///
/// assert_eq!(format_value(152.0, 1), "152");
/// assert_eq!(format_value(5.26, 1), "5.3");
/// ```
pub fn format_value(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if decimals == 0 || !value.is_finite() {
        return text;
    }
    remove_trailing_zero(&text).unwrap_or(text)
}
