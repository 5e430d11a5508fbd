//! Validation and recalculation orchestration
//!
//! Parses raw text inputs, canonicalizes them to mg/dL, runs every
//! estimation formula plus the non-HDL calculation, and formats the output
//! mapping in the requested display unit. The engine holds no state across
//! calls; recalculation with identical inputs yields identical output.

use thiserror::Error;

use crate::engine::formulas::{calculate_ldl, calculate_non_hdl};
use crate::models::{CalculationResult, LdlMethod, LipidPanel, MethodResult, NOT_APPLICABLE};
use crate::units::{from_mg_dl, to_mg_dl, Unit};

/// Calculation error types
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid numeric input for {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    #[error("input out of domain: {0}")]
    OutOfDomain(&'static str),
}

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

fn parse_field(field: &'static str, raw: &str) -> CalcResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| CalcError::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

/// Format a mg/dL value in the requested display unit, to 2 decimals
///
/// Display-unit conversion happens here and only here, so results never
/// pass through more than one conversion.
fn format_in_unit(mg_dl: f64, unit: Unit, is_triglyceride: bool) -> String {
    format!("{:.2}", from_mg_dl(mg_dl, unit, is_triglyceride))
}

/// Recalculate the full result mapping from raw text inputs
///
/// Each input field carries its own unit; values are canonicalized to mg/dL
/// before any formula runs. Unparseable text yields
/// [`CalcError::InvalidInput`]; non-positive values or HDL at or above total
/// cholesterol yield [`CalcError::OutOfDomain`]. Consumers preserving the
/// inherited UI behavior treat `OutOfDomain` as a silent skip and keep their
/// previously displayed results.
#[allow(clippy::too_many_arguments)]
pub fn recalculate(
    total_cholesterol_text: &str,
    hdl_text: &str,
    triglycerides_text: &str,
    total_unit: Unit,
    hdl_unit: Unit,
    triglycerides_unit: Unit,
    result_unit: Unit,
) -> CalcResult<CalculationResult> {
    let total_raw = parse_field("total cholesterol", total_cholesterol_text)?;
    let hdl_raw = parse_field("HDL cholesterol", hdl_text)?;
    let tg_raw = parse_field("triglycerides", triglycerides_text)?;

    let panel = LipidPanel::new(
        to_mg_dl(total_raw, total_unit, false),
        to_mg_dl(hdl_raw, hdl_unit, false),
        to_mg_dl(tg_raw, triglycerides_unit, true),
    )
    .map_err(|err| {
        tracing::warn!("recalculation skipped: {}", err);
        err
    })?;

    let results = LdlMethod::ALL
        .iter()
        .map(|&method| {
            let ldl_mg_dl = calculate_ldl(
                panel.total_cholesterol,
                panel.hdl_cholesterol,
                panel.triglycerides,
                method,
            );
            let value = if ldl_mg_dl < 0.0 {
                NOT_APPLICABLE.to_string()
            } else {
                format_in_unit(ldl_mg_dl, result_unit, false)
            };
            MethodResult {
                method,
                name: method.display_name(),
                value,
            }
        })
        .collect();

    let non_hdl_mg_dl = calculate_non_hdl(panel.total_cholesterol, panel.hdl_cholesterol);

    tracing::debug!(
        total = panel.total_cholesterol,
        hdl = panel.hdl_cholesterol,
        triglycerides = panel.triglycerides,
        result_unit = %result_unit,
        "recalculated LDL panel"
    );

    Ok(CalculationResult {
        results,
        non_hdl_value: format_in_unit(non_hdl_mg_dl, result_unit, false),
        non_hdl_unit: result_unit,
        result_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recalc_mg_dl(tc: &str, hdl: &str, tg: &str) -> CalcResult<CalculationResult> {
        recalculate(tc, hdl, tg, Unit::MgDl, Unit::MgDl, Unit::MgDl, Unit::MgDl)
    }

    #[test]
    fn test_friedewald_reference_result() {
        let result = recalc_mg_dl("200", "50", "100").unwrap();
        assert_eq!(result.get("Friedewald Formula"), Some("130.00"));
        assert_eq!(result.non_hdl_value, "150.00");
        assert_eq!(result.non_hdl_unit, Unit::MgDl);
    }

    #[test]
    fn test_all_four_methods_present() {
        let result = recalc_mg_dl("200", "50", "100").unwrap();
        assert_eq!(result.results.len(), 4);
        for method in LdlMethod::ALL {
            assert!(result.get(method.display_name()).is_some());
        }
    }

    #[test]
    fn test_invalid_input_rejected() {
        let err = recalc_mg_dl("abc", "50", "100").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field, .. } if field == "total cholesterol"));

        let err = recalc_mg_dl("200", "", "100").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field, .. } if field == "HDL cholesterol"));
    }

    #[test]
    fn test_out_of_domain_rejected() {
        assert!(matches!(
            recalc_mg_dl("0", "50", "100").unwrap_err(),
            CalcError::OutOfDomain(_)
        ));
        assert!(matches!(
            recalc_mg_dl("200", "200", "100").unwrap_err(),
            CalcError::OutOfDomain(_)
        ));
        assert!(matches!(
            recalc_mg_dl("200", "50", "-10").unwrap_err(),
            CalcError::OutOfDomain(_)
        ));
    }

    #[test]
    fn test_negative_result_displays_not_applicable() {
        // Friedewald: 100 - 90 - 500/5 = -90
        let result = recalc_mg_dl("100", "90", "500").unwrap();
        assert_eq!(result.get("Friedewald Formula"), Some(NOT_APPLICABLE));
        // Non-HDL is still the plain difference
        assert_eq!(result.non_hdl_value, "10.00");
    }

    #[test]
    fn test_recalculation_is_idempotent() {
        let a = recalc_mg_dl("223.7", "48.2", "312.9").unwrap();
        let b = recalc_mg_dl("223.7", "48.2", "312.9").unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_mmol_inputs_canonicalized_before_formulas() {
        // 5.17 mmol/L -> 199.92, 1.29 mmol/L -> 49.88, 1.13 mmol/L -> 100.08
        let result = recalculate(
            "5.17",
            "1.29",
            "1.13",
            Unit::MmolL,
            Unit::MmolL,
            Unit::MmolL,
            Unit::MgDl,
        )
        .unwrap();
        // Friedewald: 199.92 - 49.88 - 100.08/5 = 130.024
        assert_eq!(result.get("Friedewald Formula"), Some("130.02"));
    }

    #[test]
    fn test_result_unit_conversion_applied_once_at_final_step() {
        let mg = recalc_mg_dl("200", "50", "100").unwrap();
        let mmol = recalculate(
            "200",
            "50",
            "100",
            Unit::MgDl,
            Unit::MgDl,
            Unit::MgDl,
            Unit::MmolL,
        )
        .unwrap();

        // Converting the mg/dL display value must agree with the mmol/L run
        let friedewald_mg: f64 = mg.get("Friedewald Formula").unwrap().parse().unwrap();
        let friedewald_mmol: f64 = mmol.get("Friedewald Formula").unwrap().parse().unwrap();
        assert_eq!(
            friedewald_mmol,
            crate::units::from_mg_dl(friedewald_mg, Unit::MmolL, false)
        );
        // 130 / 38.67 = 3.3618... -> 3.36
        assert_eq!(mmol.get("Friedewald Formula"), Some("3.36"));
        assert_eq!(mmol.non_hdl_unit, Unit::MmolL);
        // 150 / 38.67 = 3.8789... -> 3.88
        assert_eq!(mmol.non_hdl_value, "3.88");
    }
}
