// ============================================================================
// Reserve Metrics
// F&D cost, reserve replacement, reserve life, reserves per share
// ============================================================================

use crate::error::MetricResult;
use crate::validate::validate_positive;
use rust_decimal::Decimal;

/// Calculate Finding & Development (F&D) cost.
///
/// F&D cost measures the cost per unit to find and develop new reserves,
/// a key efficiency metric for oil and gas companies.
///
/// Formula: `(exploration_costs + development_costs) / reserves_added`
///
/// # Arguments
/// - `exploration_costs`: Total exploration expenditures.
/// - `development_costs`: Total development expenditures.
/// - `reserves_added`: New reserves added in BOE. Must be positive.
///
/// # Errors
/// Returns `InvalidInput` if `reserves_added` is not positive.
///
/// # Example
/// ```
/// use petro_metrics::metrics::finding_development_cost;
/// use rust_decimal_macros::dec;
///
/// let fd = finding_development_cost(dec!(50000000), dec!(150000000), dec!(10000000))?;
/// assert_eq!(fd, dec!(20)); // $20/BOE
/// # Ok::<(), petro_metrics::MetricError>(())
/// ```
pub fn finding_development_cost(
    exploration_costs: Decimal,
    development_costs: Decimal,
    reserves_added: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(reserves_added, "reserves_added")?;
    Ok((exploration_costs + development_costs) / reserves_added)
}

/// Calculate Reserve Replacement Ratio (RRR).
///
/// RRR measures whether a company is replacing reserves faster than it is
/// producing them. A ratio above 1.0 means reserves are growing; below 1.0
/// means the reserve base is declining.
///
/// Formula: `reserves_added / production`
///
/// # Errors
/// Returns `InvalidInput` if `production` is not positive.
pub fn reserve_replacement_ratio(
    reserves_added: Decimal,
    production: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(production, "production")?;
    Ok(reserves_added / production)
}

/// Calculate Reserve Life Index (RLI).
///
/// RLI estimates how many years current proved reserves will last at the
/// current production rate.
///
/// Formula: `proved_reserves / annual_production`
///
/// # Errors
/// Returns `InvalidInput` if `proved_reserves` or `annual_production` is not
/// positive.
pub fn reserve_life_index(
    proved_reserves: Decimal,
    annual_production: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(proved_reserves, "proved_reserves")?;
    validate_positive(annual_production, "annual_production")?;
    Ok(proved_reserves / annual_production)
}

/// Calculate reserves per share.
///
/// Shows how many BOE of proved reserves back each share of stock, useful
/// for valuation comparisons across producers.
///
/// Formula: `total_proved_reserves / shares_outstanding`
///
/// # Errors
/// Returns `InvalidInput` if `total_proved_reserves` or `shares_outstanding`
/// is not positive.
pub fn reserves_per_share(
    total_proved_reserves: Decimal,
    shares_outstanding: Decimal,
) -> MetricResult<Decimal> {
    validate_positive(total_proved_reserves, "total_proved_reserves")?;
    validate_positive(shares_outstanding, "shares_outstanding")?;
    Ok(total_proved_reserves / shares_outstanding)
}
