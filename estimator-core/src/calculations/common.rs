//! Common utility functions for estimate calculations.

use rust_decimal::Decimal;

/// Rounds a value to the nearest whole currency unit using half-up rounding.
///
/// Estimates are quoted in whole dollars, and rounding happens at each
/// intermediate pricing step (labor, material, contingency) rather than once
/// at the end, so the same inputs always reproduce the same totals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimator_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(9199.4)), dec!(9199));
/// assert_eq!(round_currency(dec!(9199.5)), dec!(9200));
/// assert_eq!(round_currency(dec!(9200.0)), dec!(9200));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
