// ============================================================================
// Cost Metrics
// Lifting cost, breakeven price, capital efficiency
// ============================================================================

use crate::error::MetricResult;
use crate::validate::validate_positive;
use rust_decimal::Decimal;

/// Calculate lifting cost (operating cost per BOE).
///
/// The operating expense required to extract hydrocarbons and bring them to
/// the surface, per unit of production.
///
/// Formula: `total_operating_costs / total_production`
///
/// # Errors
/// Returns `InvalidInput` if `total_production` is not positive.
pub fn lifting_cost(
    total_operating_costs: Decimal,
    total_production: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(total_production, "total_production")?;
    Ok(total_operating_costs / total_production)
}

/// Calculate break-even price.
///
/// The minimum realized price needed to cover all costs, operating plus
/// amortized capital, per BOE produced.
///
/// Formula: `total_costs / total_production`
///
/// # Errors
/// Returns `InvalidInput` if `total_production` is not positive.
///
/// # Example
/// ```
/// use petro_metrics::metrics::breakeven_price;
/// use rust_decimal_macros::dec;
///
/// let be = breakeven_price(dec!(500000000), dec!(10000000))?;
/// assert_eq!(be, dec!(50)); // $50/BOE
/// # Ok::<(), petro_metrics::MetricError>(())
/// ```
pub fn breakeven_price(total_costs: Decimal, total_production: Decimal) -> MetricResult<Decimal> {
    validate_positive(total_production, "total_production")?;
    Ok(total_costs / total_production)
}

/// Calculate capital efficiency.
///
/// How much new production is achieved per dollar of capital invested
/// (BOE per dollar).
///
/// Formula: `production_added / capital_expenditure`
///
/// # Errors
/// Returns `InvalidInput` if `production_added` or `capital_expenditure` is
/// not positive.
pub fn capital_efficiency(
    production_added: Decimal,
    capital_expenditure: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(production_added, "production_added")?;
    validate_positive(capital_expenditure, "capital_expenditure")?;
    Ok(production_added / capital_expenditure)
}
