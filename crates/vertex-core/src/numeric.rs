//! # Numeric Module
//!
//! Tolerant numeric coercion and monetary rounding helpers.
//!
//! ## Why Coerce Instead of Reject?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE TOLERANT-INPUT PHILOSOPHY                                      │
//! │                                                                     │
//! │  Upstream feeds are messy: items arrive without prices, records     │
//! │  without quantities, strategies occasionally return garbage.        │
//! │                                                                     │
//! │  Rejecting a whole dataset for one malformed field would make the   │
//! │  pipeline useless on real feeds. Instead, EVERY numeric read goes   │
//! │  through one of the helpers below, and anything missing or          │
//! │  non-finite becomes 0.                                              │
//! │                                                                     │
//! │  One module, one rule. No call site coerces by hand.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vertex_core::numeric::{coerce, coerce_quantity, round2};
//!
//! assert_eq!(coerce(None), 0.0);
//! assert_eq!(coerce(Some(f64::NAN)), 0.0);
//! assert_eq!(coerce_quantity(Some(2.9)), 2);
//! assert_eq!(round2(3.004_999), 3.0);
//! ```

// =============================================================================
// Coercion Helpers
// =============================================================================

/// Coerces an optional numeric field to a finite `f64`, defaulting to 0.
///
/// Missing (`None`), NaN, and infinite values all coerce to 0. This is the
/// single entry point for reading any numeric input field.
#[inline]
pub fn coerce(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Coerces a strategy result to a finite value, defaulting to 0.
///
/// Strategies are external code; a NaN or infinite return is treated as
/// "no contribution" rather than poisoning every downstream sum.
#[inline]
pub fn coerce_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerces an optional quantity to an integer, defaulting to 0.
///
/// Fractional quantities truncate toward zero. Quantity sums feed the
/// top-product ranking, which is defined over whole units.
#[inline]
pub fn coerce_quantity(value: Option<f64>) -> i64 {
    coerce(value) as i64
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a monetary value to 2 decimal places (half away from zero).
///
/// ## Example
/// ```rust
/// use vertex_core::numeric::round2;
///
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(-0.125), -0.13);
/// assert_eq!(round2(3.333_333), 3.33);
/// ```
///
/// Applied to `revenue`, `profit`, and `bonus` at the projection boundary;
/// intermediate accumulation keeps full precision so per-item rounding
/// error never compounds.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_defaults_to_zero() {
        assert_eq!(coerce(None), 0.0);
        assert_eq!(coerce(Some(f64::NAN)), 0.0);
        assert_eq!(coerce(Some(f64::INFINITY)), 0.0);
        assert_eq!(coerce(Some(f64::NEG_INFINITY)), 0.0);
    }

    #[test]
    fn test_coerce_passes_finite_values() {
        assert_eq!(coerce(Some(12.5)), 12.5);
        assert_eq!(coerce(Some(-3.0)), -3.0);
        assert_eq!(coerce(Some(0.0)), 0.0);
    }

    #[test]
    fn test_coerce_finite() {
        assert_eq!(coerce_finite(40.0), 40.0);
        assert_eq!(coerce_finite(f64::NAN), 0.0);
        assert_eq!(coerce_finite(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_coerce_quantity_truncates() {
        assert_eq!(coerce_quantity(Some(2.0)), 2);
        assert_eq!(coerce_quantity(Some(2.9)), 2);
        assert_eq!(coerce_quantity(Some(-1.5)), -1);
        assert_eq!(coerce_quantity(None), 0);
        assert_eq!(coerce_quantity(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.333_333), 3.33);
        assert_eq!(round2(40.0), 40.0);
        assert_eq!(round2(0.0), 0.0);
        // 0.125 is exactly representable, so the half-away tie is real
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        // The classic 0.1 + 0.2 artifact disappears at the boundary
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    /// Documents that rounding happens once, at the boundary: summing many
    /// thirds and rounding the total differs from rounding each term.
    #[test]
    fn test_round2_applied_once_at_boundary() {
        let thirds: f64 = (0..3).map(|_| 10.0 / 3.0).sum();
        assert_eq!(round2(thirds), 10.0);

        let rounded_terms: f64 = (0..3).map(|_| round2(10.0 / 3.0)).sum();
        assert_eq!(round2(rounded_terms), 9.99);
    }
}
