// ============================================================================
// Metric Errors
// Error types for metric precondition failures
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors that can occur when evaluating a metric.
///
/// Serialize-only under the `serde` feature: the parameter name is a static
/// label, not caller data to round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MetricError {
    /// A required-positive parameter was zero or negative.
    ///
    /// Carries the parameter name and the offending value for diagnostics.
    InvalidInput {
        name: &'static str,
        value: Decimal,
    },
}

impl MetricError {
    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            MetricError::InvalidInput { name, .. } => name,
        }
    }

    /// The offending value.
    pub fn value(&self) -> Decimal {
        match self {
            MetricError::InvalidInput { value, .. } => *value,
        }
    }
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::InvalidInput { name, value } => {
                write!(f, "invalid input: {} must be positive, got {}", name, value)
            },
        }
    }
}

impl std::error::Error for MetricError {}

/// Result type alias for metric computations
pub type MetricResult<T> = Result<T, MetricError>;
