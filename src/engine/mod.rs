//! Calculation engine module
//!
//! Martin divisor lookup, the four LDL estimation formulas, and the
//! validation/recalculation orchestration.

pub mod calculator;
pub mod formulas;
pub mod martin;

pub use calculator::{recalculate, CalcError, CalcResult};
pub use formulas::{calculate_ldl, calculate_ldl_named, calculate_non_hdl};
pub use martin::get_divisor;
