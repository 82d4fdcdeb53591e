//! Derived statistics
//!
//! All statistics are computed on demand from the current collections, so
//! they are always consistent with the latest mutation; nothing here is
//! cached. Counts keyed by an enum come back as pairs in reference order,
//! zero counts included, so chart legends keep a stable layout.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};
use domain_claims::{Claim, ClaimStatus, Handler, LossType};

/// Number of claims in each status, in reference order
pub fn claim_count_by_status(claims: &[Claim]) -> Vec<(ClaimStatus, usize)> {
    ClaimStatus::ALL
        .iter()
        .map(|status| {
            let count = claims.iter().filter(|c| c.status == *status).count();
            (*status, count)
        })
        .collect()
}

/// Number of claims for each loss type, in reference order
pub fn claim_count_by_loss_type(claims: &[Claim]) -> Vec<(LossType, usize)> {
    LossType::ALL
        .iter()
        .map(|loss_type| {
            let count = claims.iter().filter(|c| c.loss_type == *loss_type).count();
            (*loss_type, count)
        })
        .collect()
}

/// Number of claims assigned to each handler, in roster order
///
/// Unassigned claims appear under no handler; the totals across all
/// handlers therefore equal the count of claims with a non-null assignment
/// (provided no claim references a handler missing from the roster).
pub fn handler_workload(handlers: &[Handler], claims: &[Claim]) -> Vec<(Handler, usize)> {
    handlers
        .iter()
        .map(|handler| {
            let count = claims.iter().filter(|c| c.is_assigned_to(handler.id)).count();
            (handler.clone(), count)
        })
        .collect()
}

/// Sum of the estimated impact across all claims
pub fn total_estimated_impact(claims: &[Claim]) -> Money {
    claims
        .iter()
        .fold(Money::zero(Currency::GBP), |acc, c| acc + c.estimated_impact)
}

/// Dashboard tile counts: brand-new claims vs other open claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenClaimCounts {
    /// Claims in status New
    pub new: usize,
    /// Claims in status In Review or Referred
    pub open: usize,
}

/// Splits the open workload into New vs In Review + Referred
pub fn open_claim_counts(claims: &[Claim]) -> OpenClaimCounts {
    let new = claims.iter().filter(|c| c.status == ClaimStatus::New).count();
    let open = claims
        .iter()
        .filter(|c| matches!(c.status, ClaimStatus::InReview | ClaimStatus::Referred))
        .count();
    OpenClaimCounts { new, open }
}
