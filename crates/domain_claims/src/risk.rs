//! Risk-flag catalog
//!
//! A static reference table mapping flag codes to human labels. The catalog
//! is fixed at build time and never mutated at runtime; flag codes on claims
//! are open strings so that a claim carrying a code the catalog does not
//! know still renders (the code doubles as its own label).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Well-known risk-flag codes
pub mod codes {
    pub const RECENT_LOSS: &str = "RECENT_LOSS";
    pub const HIGH_IMPACT: &str = "HIGH_IMPACT";
    pub const OOH_TIME: &str = "OOH_TIME";
    pub const NEW_POLICY: &str = "NEW_POLICY";
    pub const LAPSED_POLICY: &str = "LAPSED_POLICY";
    pub const PRIOR_THEFT: &str = "PRIOR_THEFT";
}

/// A catalog entry pairing a flag code with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub code: String,
    pub label: String,
}

impl RiskFlag {
    fn entry(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

static CATALOG: Lazy<Vec<RiskFlag>> = Lazy::new(|| {
    vec![
        RiskFlag::entry(codes::RECENT_LOSS, "Recent loss (≤7 days)"),
        RiskFlag::entry(codes::HIGH_IMPACT, "High estimated impact"),
        RiskFlag::entry(codes::OOH_TIME, "Out-of-hours loss time"),
        RiskFlag::entry(codes::NEW_POLICY, "New policy (<30 days)"),
        RiskFlag::entry(codes::LAPSED_POLICY, "Policy not active (lapsed)"),
        RiskFlag::entry(codes::PRIOR_THEFT, "Prior theft history"),
    ]
});

/// The full risk-flag catalog, in reference order
pub fn risk_flag_catalog() -> &'static [RiskFlag] {
    &CATALOG
}

/// Resolves a code to its catalog entry.
///
/// Unknown codes are not an error: the returned entry uses the code itself
/// as the label so callers always have something to render.
pub fn risk_flag_by_code(code: &str) -> RiskFlag {
    CATALOG
        .iter()
        .find(|flag| flag.code == code)
        .cloned()
        .unwrap_or_else(|| RiskFlag::entry(code, code))
}

/// Resolves a code to its display label, falling back to the code itself
pub fn risk_flag_label(code: &str) -> String {
    risk_flag_by_code(code).label
}
