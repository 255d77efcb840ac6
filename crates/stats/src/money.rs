//! Money arithmetic helpers.
//!
//! All aggregation happens in `Decimal`; values convert to `f64` only at the
//! serialization boundary, so binary-float drift never reaches a client.

use rust_decimal::prelude::*;

/// Monetary values round to 2 decimal places, half away from zero.
const DECIMAL_PLACES: u32 = 2;

/// Convert an `f64` price into a `Decimal` for calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a `Decimal` back to `f64` for serialization, rounded to cents.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line revenue: unit price times quantity, rounded to cents.
pub fn line_amount(price: f64, quantity: i64) -> f64 {
    to_f64(to_decimal(price) * Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_amount_multiplies_exactly() {
        assert_eq!(line_amount(100.0, 2), 200.0);
        assert_eq!(line_amount(19.99, 3), 59.97);
    }

    #[test]
    fn line_amount_avoids_binary_float_drift() {
        // 0.1 * 3 is 0.30000000000000004 in f64 arithmetic.
        assert_eq!(line_amount(0.1, 3), 0.3);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(to_f64(to_decimal(0.005)), 0.01);
        assert_eq!(to_f64(to_decimal(-0.005)), -0.01);
        assert_eq!(to_f64(to_decimal(2.344)), 2.34);
        assert_eq!(to_f64(to_decimal(2.345)), 2.35);
    }

    #[test]
    fn decimal_sum_stays_exact_over_many_lines() {
        let total: Decimal = (0..100).map(|_| to_decimal(line_amount(0.1, 1))).sum();
        assert_eq!(to_f64(total), 10.0);
    }
}
