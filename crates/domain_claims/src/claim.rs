//! Claim record and FNOL constructor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Currency, HandlerId, Money, PolicyId};

use crate::document::ClaimDocument;
use crate::note::ClaimNote;

/// Claim status
///
/// A plain enumerated field; any status may be assigned from any prior
/// status. Resolution is not terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    New,
    InReview,
    Referred,
    Resolved,
}

impl ClaimStatus {
    /// All statuses, in reference order
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::New,
        ClaimStatus::InReview,
        ClaimStatus::Referred,
        ClaimStatus::Resolved,
    ];

    /// Returns true while the claim still needs handling
    pub fn is_open(&self) -> bool {
        !matches!(self, ClaimStatus::Resolved)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimStatus::New => write!(f, "New"),
            ClaimStatus::InReview => write!(f, "In Review"),
            ClaimStatus::Referred => write!(f, "Referred"),
            ClaimStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Type of loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossType {
    Accident,
    Theft,
    WaterDamage,
    Fire,
    Storm,
}

impl LossType {
    /// All loss types, in reference order
    pub const ALL: [LossType; 5] = [
        LossType::Accident,
        LossType::Theft,
        LossType::WaterDamage,
        LossType::Fire,
        LossType::Storm,
    ];
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossType::Accident => write!(f, "Accident"),
            LossType::Theft => write!(f, "Theft"),
            LossType::WaterDamage => write!(f, "Water Damage"),
            LossType::Fire => write!(f, "Fire"),
            LossType::Storm => write!(f, "Storm"),
        }
    }
}

/// Triage recommendation for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    StpEligible,
    RequestDocuments,
    ReferToSiu,
    ReferToUnderwriting,
}

impl Recommendation {
    /// All recommendations, in reference order
    pub const ALL: [Recommendation; 4] = [
        Recommendation::StpEligible,
        Recommendation::RequestDocuments,
        Recommendation::ReferToSiu,
        Recommendation::ReferToUnderwriting,
    ];
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::StpEligible => write!(f, "STP Eligible"),
            Recommendation::RequestDocuments => write!(f, "Request Documents"),
            Recommendation::ReferToSiu => write!(f, "Refer to SIU"),
            Recommendation::ReferToUnderwriting => write!(f, "Refer to Underwriting"),
        }
    }
}

/// A police report attached to a claim
///
/// The crime reference may lag the report itself, so it stays optional
/// inside; a reference without a report is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceReport {
    /// Crime reference, e.g. "MET-CR-118820", once issued
    pub reference: Option<String>,
}

impl PoliceReport {
    /// A report that has been filed but has no reference yet
    pub fn filed() -> Self {
        Self { reference: None }
    }

    /// A report with its crime reference
    pub fn with_reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
        }
    }
}

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claim number, e.g. "CLM-000742"
    pub claim_number: String,
    /// Policy the claim is made against
    pub policy_id: PolicyId,
    /// Type of loss
    pub loss_type: LossType,
    /// When the loss occurred
    pub loss_date_time: DateTime<Utc>,
    /// Status
    pub status: ClaimStatus,
    /// Assigned handler, if any
    pub assigned_to: Option<HandlerId>,
    /// Whether anyone was injured
    pub injury: bool,
    /// Police report, when one was filed
    pub police_report: Option<PoliceReport>,
    /// What happened, in the customer's words
    pub incident_description: String,
    /// Estimated monetary impact
    pub estimated_impact: Money,
    /// Risk-flag codes raised against the claim
    pub risk_flags: Vec<String>,
    /// Triage recommendation
    pub recommendation: Recommendation,
    /// Requested/received documents
    pub documents: Vec<ClaimDocument>,
    /// Handler notes, append-only
    pub notes: Vec<ClaimNote>,
    /// When the claim was reported
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new First Notice of Loss claim.
    ///
    /// This is the wizard-flow constructor: it generates the id and claim
    /// number and applies the new-claim defaults: status New, zero
    /// estimated impact, no risk flags, no documents or notes, STP-eligible
    /// recommendation.
    pub fn fnol(policy_id: PolicyId, loss_type: LossType, loss_date_time: DateTime<Utc>) -> Self {
        Self {
            id: ClaimId::new_v7(),
            claim_number: generate_claim_number(),
            policy_id,
            loss_type,
            loss_date_time,
            status: ClaimStatus::New,
            assigned_to: None,
            injury: false,
            police_report: None,
            incident_description: String::new(),
            estimated_impact: Money::zero(Currency::GBP),
            risk_flags: Vec::new(),
            recommendation: Recommendation::StpEligible,
            documents: Vec::new(),
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns true if the given handler is assigned to this claim
    pub fn is_assigned_to(&self, handler_id: HandlerId) -> bool {
        self.assigned_to == Some(handler_id)
    }

    /// Merges the set fields of `update` into this claim.
    ///
    /// Unset (`None`) fields are left untouched. `assigned_to` and
    /// `police_report` are doubly optional so that they can be cleared
    /// as well as changed.
    pub fn apply(&mut self, update: ClaimUpdate) {
        if let Some(loss_type) = update.loss_type {
            self.loss_type = loss_type;
        }
        if let Some(loss_date_time) = update.loss_date_time {
            self.loss_date_time = loss_date_time;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(assigned_to) = update.assigned_to {
            self.assigned_to = assigned_to;
        }
        if let Some(injury) = update.injury {
            self.injury = injury;
        }
        if let Some(police_report) = update.police_report {
            self.police_report = police_report;
        }
        if let Some(incident_description) = update.incident_description {
            self.incident_description = incident_description;
        }
        if let Some(estimated_impact) = update.estimated_impact {
            self.estimated_impact = estimated_impact;
        }
        if let Some(risk_flags) = update.risk_flags {
            self.risk_flags = risk_flags;
        }
        if let Some(recommendation) = update.recommendation {
            self.recommendation = recommendation;
        }
    }
}

/// Partial update to a claim; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimUpdate {
    pub loss_type: Option<LossType>,
    pub loss_date_time: Option<DateTime<Utc>>,
    pub status: Option<ClaimStatus>,
    /// `Some(None)` clears the assignment
    pub assigned_to: Option<Option<HandlerId>>,
    pub injury: Option<bool>,
    /// `Some(None)` withdraws the police report
    pub police_report: Option<Option<PoliceReport>>,
    pub incident_description: Option<String>,
    pub estimated_impact: Option<Money>,
    pub risk_flags: Option<Vec<String>>,
    pub recommendation: Option<Recommendation>,
}

impl ClaimUpdate {
    /// Shorthand for a status-only update
    pub fn status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Shorthand for reassigning (or unassigning) the claim
    pub fn assign(handler: Option<HandlerId>) -> Self {
        Self {
            assigned_to: Some(handler),
            ..Self::default()
        }
    }
}

/// Generates a claim number in the book's format, e.g. `CLM-000742`
fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("CLM-{:06}", duration.as_micros() % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fnol_claim() -> Claim {
        Claim::fnol(PolicyId::new(), LossType::Accident, Utc::now())
    }

    #[test]
    fn test_fnol_defaults() {
        let claim = fnol_claim();
        assert_eq!(claim.status, ClaimStatus::New);
        assert!(claim.assigned_to.is_none());
        assert!(claim.estimated_impact.is_zero());
        assert!(claim.risk_flags.is_empty());
        assert!(claim.documents.is_empty());
        assert!(claim.notes.is_empty());
        assert_eq!(claim.recommendation, Recommendation::StpEligible);
    }

    #[test]
    fn test_claim_number_format() {
        let claim = fnol_claim();
        assert!(claim.claim_number.starts_with("CLM-"));
        assert_eq!(claim.claim_number.len(), 10);
    }

    #[test]
    fn test_status_display_matches_reference_strings() {
        assert_eq!(ClaimStatus::InReview.to_string(), "In Review");
        assert_eq!(LossType::WaterDamage.to_string(), "Water Damage");
        assert_eq!(Recommendation::ReferToSiu.to_string(), "Refer to SIU");
    }

    #[test]
    fn test_any_status_transition_is_allowed() {
        let mut claim = fnol_claim();
        claim.apply(ClaimUpdate::status(ClaimStatus::Resolved));
        assert_eq!(claim.status, ClaimStatus::Resolved);

        // resolution is not terminal
        claim.apply(ClaimUpdate::status(ClaimStatus::New));
        assert_eq!(claim.status, ClaimStatus::New);
    }

    #[test]
    fn test_assignment_can_be_cleared() {
        let mut claim = fnol_claim();
        let handler = HandlerId::new();

        claim.apply(ClaimUpdate::assign(Some(handler)));
        assert!(claim.is_assigned_to(handler));

        claim.apply(ClaimUpdate::assign(None));
        assert!(claim.assigned_to.is_none());
    }

    #[test]
    fn test_unset_fields_are_untouched() {
        let mut claim = fnol_claim();
        claim.incident_description = "Rear-ended in traffic".to_string();

        claim.apply(ClaimUpdate::status(ClaimStatus::InReview));

        assert_eq!(claim.incident_description, "Rear-ended in traffic");
        assert_eq!(claim.loss_type, LossType::Accident);
    }

    #[test]
    fn test_open_statuses() {
        assert!(ClaimStatus::New.is_open());
        assert!(ClaimStatus::InReview.is_open());
        assert!(ClaimStatus::Referred.is_open());
        assert!(!ClaimStatus::Resolved.is_open());
    }
}
