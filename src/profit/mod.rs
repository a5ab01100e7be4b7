//! Profitability Engine
//!
//! The core of the advisory pipeline:
//! - `yield_model.rs` - multiplicative yield penalties from nutrient deficits
//! - `cost.rs` - amortized establishment, remediation, labour, misc overhead
//! - `calculator.rs` - two-scenario net profit, break-even, reduction %

pub mod calculator;
pub mod cost;
pub mod yield_model;

pub use calculator::{calculate_profitability, ProfitabilityReport};
pub use cost::{amortize_establishment_cost, fertilizer_remediation_cost, MISC_OVERHEAD_RATE};
pub use yield_model::adjust_yield;
