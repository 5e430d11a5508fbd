//! Measurement unit module
//!
//! Handles lipid measurement units and mg/dL <-> mmol/L conversions.

pub mod converter;
pub mod unit;

pub use converter::{convert, from_mg_dl, round_to_decimal_places, to_mg_dl};
pub use unit::{Unit, MG_DL_PER_MMOL_L_CHOLESTEROL, MG_DL_PER_MMOL_L_TRIGLYCERIDES};
