//! Lipid panel model
//!
//! A validated set of lipid panel inputs, always held in canonical mg/dL.
//! Panels are constructed fresh for every recalculation and never mutated in
//! place.

use serde::{Deserialize, Serialize};

use crate::engine::{CalcError, CalcResult};

/// A lipid panel reading in canonical mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LipidPanel {
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub triglycerides: f64,
}

impl LipidPanel {
    /// Construct a validated panel from mg/dL values
    ///
    /// Enforces the domain invariants: every value strictly positive, and
    /// HDL below total cholesterol.
    pub fn new(
        total_cholesterol: f64,
        hdl_cholesterol: f64,
        triglycerides: f64,
    ) -> CalcResult<Self> {
        if total_cholesterol <= 0.0 || hdl_cholesterol <= 0.0 || triglycerides <= 0.0 {
            return Err(CalcError::OutOfDomain(
                "all values must be greater than 0",
            ));
        }
        if hdl_cholesterol >= total_cholesterol {
            return Err(CalcError::OutOfDomain(
                "HDL cholesterol must be below total cholesterol",
            ));
        }

        Ok(Self {
            total_cholesterol,
            hdl_cholesterol,
            triglycerides,
        })
    }

    /// Non-HDL cholesterol in mg/dL
    pub fn non_hdl(&self) -> f64 {
        self.total_cholesterol - self.hdl_cholesterol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_panel() {
        let panel = LipidPanel::new(200.0, 50.0, 100.0).unwrap();
        assert_eq!(panel.total_cholesterol, 200.0);
        assert_eq!(panel.hdl_cholesterol, 50.0);
        assert_eq!(panel.triglycerides, 100.0);
    }

    #[test]
    fn test_non_positive_values_rejected() {
        assert!(LipidPanel::new(0.0, 50.0, 100.0).is_err());
        assert!(LipidPanel::new(200.0, -1.0, 100.0).is_err());
        assert!(LipidPanel::new(200.0, 50.0, 0.0).is_err());
    }

    #[test]
    fn test_hdl_at_or_above_total_rejected() {
        assert!(LipidPanel::new(200.0, 200.0, 100.0).is_err());
        assert!(LipidPanel::new(200.0, 250.0, 100.0).is_err());
    }

    #[test]
    fn test_non_hdl_is_exact_difference() {
        let panel = LipidPanel::new(200.0, 50.0, 100.0).unwrap();
        assert_eq!(panel.non_hdl(), 150.0);

        let panel = LipidPanel::new(187.5, 42.25, 90.0).unwrap();
        assert_eq!(panel.non_hdl(), 187.5 - 42.25);
    }
}
