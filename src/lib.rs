// ============================================================================
// Petroleum Metrics Library
// Petroleum economics metrics with exact decimal arithmetic
// ============================================================================

//! # Petro Metrics
//!
//! Stateless formula functions for petroleum-industry financial analysis.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** via [`rust_decimal`], no binary floating
//!   point anywhere
//! - **Pure functions**: no state, no I/O, safe to call from any number of
//!   threads without coordination
//! - **Validated preconditions**: required-positive inputs are checked before
//!   any arithmetic, and violations name the offending parameter
//! - **Reporting helpers** for the industry rounding convention (two decimal
//!   places for currency, four for ratios)
//!
//! ## Example
//!
//! ```rust
//! use petro_metrics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), MetricError> {
//! // $20M exploration + $30M development adding 5M BOE
//! let fd_cost = finding_development_cost(dec!(20000000), dec!(30000000), dec!(5000000))?;
//! assert_eq!(fd_cost, dec!(10)); // $10/BOE
//!
//! // Per-barrel profitability
//! let nb = netback(dec!(70.00), dec!(10.00), dec!(5.00), dec!(15.00))?;
//! assert_eq!(nb, dec!(40.00));
//!
//! // How many times netback recovers F&D cost
//! let recycle = recycle_ratio(nb, fd_cost)?;
//! assert_eq!(recycle, dec!(4));
//!
//! // Validation failures name the parameter
//! let err = breakeven_price(dec!(500000000), dec!(0)).unwrap_err();
//! assert_eq!(err.parameter(), "total_production");
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod format;
pub mod metrics;
pub mod validate;

pub use error::{MetricError, MetricResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::error::{MetricError, MetricResult};
    pub use crate::format::{currency, ratio};
    pub use crate::metrics::{
        breakeven_price, capital_efficiency, finding_development_cost, lifting_cost, netback,
        operating_netback_margin, recycle_ratio, reserve_life_index, reserve_replacement_ratio,
        reserves_per_share,
    };
    pub use crate::validate::validate_positive;
}
