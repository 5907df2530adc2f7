// ============================================================================
// Input Validation
// Precondition guards shared by all metric functions
// ============================================================================

use crate::error::{MetricError, MetricResult};
use rust_decimal::Decimal;

/// Require that `value` is strictly greater than zero.
///
/// Used as a guard clause at the top of any formula whose denominator (or
/// other input) must be strictly positive.
///
/// # Errors
/// Returns `InvalidInput` naming `name` if `value` is zero or negative.
#[inline]
pub fn validate_positive(value: Decimal, name: &'static str) -> MetricResult<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        tracing::debug!("rejected {}: {} is not positive", name, value);
        Err(MetricError::InvalidInput { name, value })
    }
}
