//! Data models
//!
//! Rust structs representing lipid panel inputs and calculation outputs.

mod method;
mod panel;
mod result;

pub use method::LdlMethod;
pub use panel::LipidPanel;
pub use result::{CalculationResult, MethodResult, NOT_APPLICABLE};
