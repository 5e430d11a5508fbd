//! LDL estimation formulas
//!
//! Pure functions implementing the four published estimation formulas over
//! mg/dL-canonicalized inputs. Negative results are returned as-is; the
//! negative-to-"N/A" display policy belongs to the orchestrator.

use crate::engine::martin::get_divisor;
use crate::models::LdlMethod;

/// Estimate LDL cholesterol in mg/dL using the given method
///
/// Inputs must already be canonicalized to mg/dL. Friedewald is classically
/// invalid for triglycerides at or above 400 mg/dL, but no range gating is
/// applied here; consumers decide display policy from the sign of the
/// result.
pub fn calculate_ldl(
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    triglycerides: f64,
    method: LdlMethod,
) -> f64 {
    match method {
        LdlMethod::Friedewald => total_cholesterol - hdl_cholesterol - triglycerides / 5.0,
        LdlMethod::SampsonNih => {
            (total_cholesterol / 0.948) - (hdl_cholesterol / 0.971)
                - ((triglycerides / 8.56)
                    + (triglycerides * ((total_cholesterol - hdl_cholesterol) / 2140.0))
                    - (triglycerides * triglycerides / 16100.0))
                - 9.44
        }
        LdlMethod::YaylaTr => {
            total_cholesterol - hdl_cholesterol - (triglycerides.sqrt() * total_cholesterol) / 100.0
        }
        LdlMethod::ExtendedMartin => {
            let non_hdl = total_cholesterol - hdl_cholesterol;
            // Bracket selection truncates both inputs, never rounds
            let divisor = get_divisor(triglycerides as i64, non_hdl as i64);
            total_cholesterol - hdl_cholesterol - triglycerides / divisor
        }
    }
}

/// String-keyed estimation entry point
///
/// An unknown method name degrades to 0.0 rather than failing; this keeps
/// the inherited behavior for consumers that still dispatch on the display
/// names.
pub fn calculate_ldl_named(
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    triglycerides: f64,
    method: &str,
) -> f64 {
    match LdlMethod::from_str(method) {
        Some(m) => calculate_ldl(total_cholesterol, hdl_cholesterol, triglycerides, m),
        None => {
            tracing::warn!("unknown LDL method '{}', returning 0.0", method);
            0.0
        }
    }
}

/// Non-HDL cholesterol in mg/dL
pub fn calculate_non_hdl(total_cholesterol: f64, hdl_cholesterol: f64) -> f64 {
    total_cholesterol - hdl_cholesterol
}
