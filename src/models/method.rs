//! LDL estimation method enum
//!
//! The four published estimation formulas supported by the engine. Dispatch
//! is over this closed enum; the display names are part of the external
//! contract and are consumed as result-mapping keys by the presentation
//! layer.

use serde::{Deserialize, Serialize};

/// LDL estimation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LdlMethod {
    Friedewald,
    SampsonNih,
    YaylaTr,
    ExtendedMartin,
}

impl LdlMethod {
    /// All methods in stable display order
    pub const ALL: [LdlMethod; 4] = [
        LdlMethod::Friedewald,
        LdlMethod::SampsonNih,
        LdlMethod::YaylaTr,
        LdlMethod::ExtendedMartin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LdlMethod::Friedewald => "friedewald",
            LdlMethod::SampsonNih => "sampson_nih",
            LdlMethod::YaylaTr => "yayla_tr",
            LdlMethod::ExtendedMartin => "extended_martin",
        }
    }

    /// Parse from string, accepting both internal and display names
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "friedewald" | "Friedewald" | "Friedewald Formula" => Some(LdlMethod::Friedewald),
            "sampson_nih" | "Sampson-NIH" | "Sampson-NIH Formula" => Some(LdlMethod::SampsonNih),
            "yayla_tr" | "Yayla-TR" | "Yayla-TR Formula" => Some(LdlMethod::YaylaTr),
            "extended_martin" | "Extended Martin" | "Extended Martin Formula" => {
                Some(LdlMethod::ExtendedMartin)
            }
            _ => None,
        }
    }

    /// Contract display name, used as the result-mapping key
    pub fn display_name(&self) -> &'static str {
        match self {
            LdlMethod::Friedewald => "Friedewald Formula",
            LdlMethod::SampsonNih => "Sampson-NIH Formula",
            LdlMethod::YaylaTr => "Yayla-TR Formula",
            LdlMethod::ExtendedMartin => "Extended Martin Formula",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_contract_strings() {
        assert_eq!(LdlMethod::Friedewald.display_name(), "Friedewald Formula");
        assert_eq!(LdlMethod::SampsonNih.display_name(), "Sampson-NIH Formula");
        assert_eq!(LdlMethod::YaylaTr.display_name(), "Yayla-TR Formula");
        assert_eq!(
            LdlMethod::ExtendedMartin.display_name(),
            "Extended Martin Formula"
        );
    }

    #[test]
    fn test_from_str_accepts_display_names() {
        for method in LdlMethod::ALL {
            assert_eq!(LdlMethod::from_str(method.display_name()), Some(method));
            assert_eq!(LdlMethod::from_str(method.as_str()), Some(method));
        }
        assert_eq!(LdlMethod::from_str("Iranian Formula"), None);
    }

    #[test]
    fn test_all_order_is_stable() {
        let names: Vec<&str> = LdlMethod::ALL.iter().map(|m| m.display_name()).collect();
        assert_eq!(
            names,
            vec![
                "Friedewald Formula",
                "Sampson-NIH Formula",
                "Yayla-TR Formula",
                "Extended Martin Formula"
            ]
        );
    }
}
