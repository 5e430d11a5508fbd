//! LDL Calculator (ldlcalc) Library
//!
//! Core calculation engine for estimating LDL cholesterol from a lipid
//! panel using four published formulas, with mg/dL and mmol/L support.

pub mod build_info;
pub mod engine;
pub mod models;
pub mod units;
