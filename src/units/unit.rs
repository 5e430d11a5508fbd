//! Unit types and conversion constants
//!
//! Provides the measurement unit type and standard conversion factors for
//! lipid panel values.

use serde::{Deserialize, Serialize};

/// Measurement unit for a lipid panel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Milligrams per deciliter (canonical storage unit)
    #[serde(rename = "mg/dL")]
    MgDl,
    /// Millimoles per liter
    #[serde(rename = "mmol/L")]
    MmolL,
}

impl Unit {
    /// Get the display string for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::MgDl => "mg/dL",
            Unit::MmolL => "mmol/L",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "mg/dl" | "mgdl" | "mg" => Some(Unit::MgDl),
            "mmol/l" | "mmoll" | "mmol" => Some(Unit::MmolL),
            _ => None,
        }
    }

    /// The other unit in the pair
    pub fn other(&self) -> Self {
        match self {
            Unit::MgDl => Unit::MmolL,
            Unit::MmolL => Unit::MgDl,
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::MgDl
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Conversion Constants (mg/dL per mmol/L)
// ============================================================================

// Informal clinical conversion factors, not exact molar masses. The
// cholesterol factor applies to total, HDL, non-HDL and LDL values;
// triglycerides carry their own factor.

/// mg/dL per mmol/L for cholesterol-class measures
pub const MG_DL_PER_MMOL_L_CHOLESTEROL: f64 = 38.67;
/// mg/dL per mmol/L for triglycerides
pub const MG_DL_PER_MMOL_L_TRIGLYCERIDES: f64 = 88.57;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_as_str() {
        assert_eq!(Unit::MgDl.as_str(), "mg/dL");
        assert_eq!(Unit::MmolL.as_str(), "mmol/L");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!(Unit::from_str("mg/dL"), Some(Unit::MgDl));
        assert_eq!(Unit::from_str("MG/DL"), Some(Unit::MgDl));
        assert_eq!(Unit::from_str("mmol/L"), Some(Unit::MmolL));
        assert_eq!(Unit::from_str("mmol"), Some(Unit::MmolL));
        assert_eq!(Unit::from_str("grams"), None);
    }

    #[test]
    fn test_unit_other() {
        assert_eq!(Unit::MgDl.other(), Unit::MmolL);
        assert_eq!(Unit::MmolL.other(), Unit::MgDl);
    }

    #[test]
    fn test_unit_serde_rename() {
        assert_eq!(serde_json::to_string(&Unit::MgDl).unwrap(), "\"mg/dL\"");
        assert_eq!(serde_json::to_string(&Unit::MmolL).unwrap(), "\"mmol/L\"");
        let unit: Unit = serde_json::from_str("\"mmol/L\"").unwrap();
        assert_eq!(unit, Unit::MmolL);
    }
}
