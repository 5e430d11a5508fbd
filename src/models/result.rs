//! Calculation result model
//!
//! The full output mapping produced by one recalculation: a formatted value
//! (or the "N/A" sentinel) per estimation method, plus the derived non-HDL
//! cholesterol. Results are recomputed wholesale on every trigger, never
//! partially updated.

use serde::Serialize;

use crate::models::LdlMethod;
use crate::units::Unit;

/// Sentinel displayed when a formula yields a negative result
pub const NOT_APPLICABLE: &str = "N/A";

/// One method's formatted result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodResult {
    pub method: LdlMethod,
    /// Display name, the result-mapping key consumed by the presentation layer
    pub name: &'static str,
    /// 2-decimal formatted value in the result unit, or "N/A"
    pub value: String,
}

/// Complete output of one recalculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// One entry per method, in `LdlMethod::ALL` order
    pub results: Vec<MethodResult>,
    /// Non-HDL cholesterol, formatted to 2 decimals in the result unit
    pub non_hdl_value: String,
    pub non_hdl_unit: Unit,
    /// Unit the LDL values are expressed in
    pub result_unit: Unit,
}

impl CalculationResult {
    /// Look up a method's formatted value by its display-name key
    pub fn get(&self, name: &str) -> Option<&str> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.value.as_str())
    }
}
