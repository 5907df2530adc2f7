// ============================================================================
// Metrics Module
// Petroleum economics formula functions
// ============================================================================
//
// Each function is a pure mapping: validate preconditions, then compute and
// return a closed-form decimal expression of the inputs. Same inputs always
// produce the same output, no side effects.

pub mod costs;
pub mod netback;
pub mod reserves;

pub use costs::{breakeven_price, capital_efficiency, lifting_cost};
pub use netback::{netback, operating_netback_margin, recycle_ratio};
pub use reserves::{
    finding_development_cost, reserve_life_index, reserve_replacement_ratio, reserves_per_share,
};
