// ============================================================================
// Display Formatting
// Rounding conventions for reported metric values
// ============================================================================
//
// Formula outputs are never rounded inside the metric functions; callers
// opt in to the reporting convention here. Currency amounts and percentages
// report at two decimal places, dimensionless ratios at four, both with
// banker's rounding (round half to even).

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for currency amounts and percentages
pub const CURRENCY_DP: u32 = 2;
/// Decimal places for dimensionless ratios
pub const RATIO_DP: u32 = 4;

/// Round a currency amount or percentage to the reporting convention.
#[inline]
pub fn currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Round a dimensionless ratio to the reporting convention.
#[inline]
pub fn ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_DP, RoundingStrategy::MidpointNearestEven)
}
