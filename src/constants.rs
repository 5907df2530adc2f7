// ============================================================================
// Financial Constants
// Shared mathematical and financial constants for metric calculations
// ============================================================================

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Low discount rate (5%)
pub const DISCOUNT_RATE_LOW: Decimal = dec!(0.05);
/// Medium discount rate (10%)
pub const DISCOUNT_RATE_MEDIUM: Decimal = dec!(0.10);
/// High discount rate (15%)
pub const DISCOUNT_RATE_HIGH: Decimal = dec!(0.15);

/// Calendar days per year
pub const DAYS_PER_YEAR: Decimal = dec!(365);
/// Business days per year
pub const BUSINESS_DAYS_PER_YEAR: Decimal = dec!(252);

/// One basis point (0.01%)
pub const BASIS_POINT: Decimal = dec!(0.0001);

/// Convergence tolerance for iterative calculations
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.000001);
/// Iteration cap for iterative calculations
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Barrels per day to annual barrels
pub const BARRELS_PER_DAY_TO_ANNUAL: Decimal = dec!(365);
/// Barrel of oil to barrel of oil equivalent
pub const BBL_TO_BOE: Decimal = dec!(1);
/// Thousand cubic feet of gas to BOE
pub const MCF_TO_BOE: Decimal = dec!(0.166667);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_point_scale() {
        assert_eq!(BASIS_POINT * dec!(10000), dec!(1));
    }

    #[test]
    fn test_annualization_matches_calendar() {
        assert_eq!(BARRELS_PER_DAY_TO_ANNUAL, DAYS_PER_YEAR);
    }

    #[test]
    fn test_six_mcf_is_roughly_one_boe() {
        // Industry convention: ~6 mcf of gas per BOE
        let six_mcf = MCF_TO_BOE * dec!(6);
        assert!(six_mcf > dec!(0.99) && six_mcf < dec!(1.01));
    }
}
