//! Common utility functions for landed-cost calculations.
//!
//! This module provides shared functionality used across the calculators,
//! including output rounding and clamping.

use rust_decimal::Decimal;

/// Rounds a decimal value to the nearest whole unit using half-up rounding.
///
/// Values exactly halfway between two units are rounded away from zero, so
/// `0.5` becomes `1` and `-0.5` becomes `-1`.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use landed_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.4)), dec!(123));
/// assert_eq!(round_half_up(dec!(123.5)), dec!(124));
/// assert_eq!(round_half_up(dec!(123.6)), dec!(124));
/// assert_eq!(round_half_up(dec!(-123.5)), dec!(-124)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use landed_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
