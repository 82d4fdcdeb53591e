//! Static reference data exposed by the store
//!
//! The enum reference lists live on their domain types; this module bundles
//! them into one render-ready record for dropdowns and chart legends, the
//! same shape the store's full snapshot carries.

use serde::{Deserialize, Serialize};

use domain_claims::{risk_flag_catalog, ClaimStatus, LossType, Recommendation, RiskFlag};
use domain_policy::ProductLine;

/// The reference lists, in their fixed display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub products: Vec<ProductLine>,
    pub loss_types: Vec<LossType>,
    pub claim_statuses: Vec<ClaimStatus>,
    pub recommendations: Vec<Recommendation>,
    pub risk_flag_catalog: Vec<RiskFlag>,
}

impl ReferenceData {
    /// Builds the reference record from the domain constants
    pub fn current() -> Self {
        Self {
            products: ProductLine::ALL.to_vec(),
            loss_types: LossType::ALL.to_vec(),
            claim_statuses: ClaimStatus::ALL.to_vec(),
            recommendations: Recommendation::ALL.to_vec(),
            risk_flag_catalog: risk_flag_catalog().to_vec(),
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::current()
    }
}
