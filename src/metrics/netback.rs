// ============================================================================
// Netback Metrics
// Netback, operating netback margin, recycle ratio
// ============================================================================

use crate::error::MetricResult;
use crate::validate::validate_positive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Calculate netback.
///
/// Net revenue per barrel after deducting all direct costs. Netback is
/// linear in its inputs and may legitimately be negative when costs exceed
/// the realized price.
///
/// Formula: `oil_price - royalties - transportation - operating_costs`
///
/// # Example
/// ```
/// use petro_metrics::metrics::netback;
/// use rust_decimal_macros::dec;
///
/// let nb = netback(dec!(70.00), dec!(10.00), dec!(5.00), dec!(15.00))?;
/// assert_eq!(nb, dec!(40.00)); // $40/bbl
/// # Ok::<(), petro_metrics::MetricError>(())
/// ```
pub fn netback(
    oil_price: Decimal,
    royalties: Decimal,
    transportation: Decimal,
    operating_costs: Decimal,
) -> MetricResult<Decimal> {
    Ok(oil_price - royalties - transportation - operating_costs)
}

/// Calculate operating netback margin.
///
/// The percentage of the realized oil price retained as netback after
/// direct costs.
///
/// Formula: `(netback / oil_price) × 100`
///
/// # Errors
/// Returns `InvalidInput` if `oil_price` is not positive.
pub fn operating_netback_margin(netback: Decimal, oil_price: Decimal) -> MetricResult<Decimal> {
    validate_positive(oil_price, "oil_price")?;
    Ok(netback / oil_price * dec!(100))
}

/// Calculate recycle ratio.
///
/// Compares netback to F&D cost: how many times over production recovers
/// the cost of finding and developing the reserves it depletes. A ratio
/// above 2.0 is generally considered highly profitable; below 1.0 the
/// company is destroying value.
///
/// Formula: `operating_netback / finding_development_cost`
///
/// # Errors
/// Returns `InvalidInput` if `finding_development_cost` is not positive.
pub fn recycle_ratio(
    operating_netback: Decimal,
    finding_development_cost: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(finding_development_cost, "finding_development_cost")?;
    Ok(operating_netback / finding_development_cost)
}
