//! Unit conversion functions
//!
//! Converts lipid values between mg/dL and mmol/L. Cholesterol-class measures
//! (total, HDL, non-HDL, LDL) and triglycerides use different conversion
//! factors, so every conversion carries an `is_triglyceride` flag.

use super::unit::{Unit, MG_DL_PER_MMOL_L_CHOLESTEROL, MG_DL_PER_MMOL_L_TRIGLYCERIDES};

/// Round a value to the given number of decimal places
///
/// Scales by a power of ten, rounds to the nearest integer (ties away from
/// zero), and scales back. All displayed values use 2 places.
pub fn round_to_decimal_places(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

/// Conversion factor (mg/dL per mmol/L) for the measure class
fn factor_for(is_triglyceride: bool) -> f64 {
    if is_triglyceride {
        MG_DL_PER_MMOL_L_TRIGLYCERIDES
    } else {
        MG_DL_PER_MMOL_L_CHOLESTEROL
    }
}

/// Convert a value in the given unit to mg/dL, rounded to 2 decimal places
///
/// A value already in mg/dL passes through unchanged.
pub fn to_mg_dl(value: f64, unit: Unit, is_triglyceride: bool) -> f64 {
    match unit {
        Unit::MgDl => value,
        Unit::MmolL => round_to_decimal_places(value * factor_for(is_triglyceride), 2),
    }
}

/// Convert a canonical mg/dL value to the given unit, rounded to 2 decimal places
///
/// Requesting mg/dL passes the value through unchanged.
pub fn from_mg_dl(value: f64, unit: Unit, is_triglyceride: bool) -> f64 {
    match unit {
        Unit::MgDl => value,
        Unit::MmolL => round_to_decimal_places(value / factor_for(is_triglyceride), 2),
    }
}

/// Convert a value from the given unit to the other unit
///
/// Used for live field-level unit toggling in a consumer UI.
pub fn convert(value: f64, from_unit: Unit, is_triglyceride: bool) -> f64 {
    match from_unit {
        Unit::MgDl => from_mg_dl(value, Unit::MmolL, is_triglyceride),
        Unit::MmolL => to_mg_dl(value, Unit::MmolL, is_triglyceride),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimal_places() {
        assert_eq!(round_to_decimal_places(1.005, 2), 1.0);
        assert_eq!(round_to_decimal_places(2.675000000001, 2), 2.68);
        assert_eq!(round_to_decimal_places(130.0, 2), 130.0);
        assert_eq!(round_to_decimal_places(5.174999, 2), 5.17);
    }

    #[test]
    fn test_cholesterol_to_mg_dl() {
        // 5.17 mmol/L * 38.67 = 199.9239 -> 199.92
        assert_eq!(to_mg_dl(5.17, Unit::MmolL, false), 199.92);
        // mg/dL passes through untouched
        assert_eq!(to_mg_dl(200.0, Unit::MgDl, false), 200.0);
    }

    #[test]
    fn test_triglyceride_to_mg_dl() {
        // 1.69 mmol/L * 88.57 = 149.6833 -> 149.68
        assert_eq!(to_mg_dl(1.69, Unit::MmolL, true), 149.68);
        assert_eq!(to_mg_dl(150.0, Unit::MgDl, true), 150.0);
    }

    #[test]
    fn test_from_mg_dl() {
        // 200 / 38.67 = 5.1719... -> 5.17
        assert_eq!(from_mg_dl(200.0, Unit::MmolL, false), 5.17);
        // 150 / 88.57 = 1.6936... -> 1.69
        assert_eq!(from_mg_dl(150.0, Unit::MmolL, true), 1.69);
        assert_eq!(from_mg_dl(130.0, Unit::MgDl, false), 130.0);
    }

    #[test]
    fn test_zero_conversion() {
        assert_eq!(to_mg_dl(0.0, Unit::MmolL, false), 0.0);
        assert_eq!(from_mg_dl(0.0, Unit::MmolL, true), 0.0);
    }

    #[test]
    fn test_cholesterol_round_trip() {
        // Round trip within the 2-decimal rounding tolerance
        let original = 5.2;
        let mg_dl = to_mg_dl(original, Unit::MmolL, false);
        let back = from_mg_dl(mg_dl, Unit::MmolL, false);
        assert!((back - original).abs() < 0.01);
    }

    #[test]
    fn test_triglyceride_round_trip() {
        let original = 1.7;
        let mg_dl = to_mg_dl(original, Unit::MmolL, true);
        let back = from_mg_dl(mg_dl, Unit::MmolL, true);
        assert!((back - original).abs() < 0.01);
    }

    #[test]
    fn test_convert_toggles_unit() {
        // mg/dL -> mmol/L
        assert_eq!(convert(200.0, Unit::MgDl, false), 5.17);
        // mmol/L -> mg/dL
        assert_eq!(convert(5.17, Unit::MmolL, false), 199.92);
        // triglycerides use their own factor
        assert_eq!(convert(177.14, Unit::MgDl, true), 2.0);
    }
}
