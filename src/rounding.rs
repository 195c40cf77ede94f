//! Fixed-decimal rounding.
//!
//! Several results in this crate (loan payments, IRR estimates, solved
//! linear systems) are defined with a fixed number of decimal places as
//! part of their contract. This module holds the single rounding rule
//! they all share.

/// Rounds `value` to `decimal_places` decimal digits.
///
/// Uses scale-round-unscale with half-away-from-zero tie breaking
/// (the behavior of `f64::round`).
///
/// Non-finite inputs (NaN, ±∞) are returned unchanged.
///
/// # Examples
/// ```
/// use numkit::rounding::round_to;
/// assert_eq!(round_to(1.41421356, 5), 1.41421);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimal_places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_basic() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.14159, 4), 3.1416);
        assert_eq!(round_to(3.14159, 0), 3.0);
    }

    #[test]
    fn test_round_to_negative_values() {
        assert_eq!(round_to(-100.5, 0), -101.0); // half away from zero
        assert_eq!(round_to(-3.14159, 3), -3.142);
    }

    #[test]
    fn test_round_to_already_exact() {
        assert_eq!(round_to(100.0, 2), 100.0);
        assert_eq!(round_to(0.25, 2), 0.25);
    }

    #[test]
    fn test_round_to_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }
}
