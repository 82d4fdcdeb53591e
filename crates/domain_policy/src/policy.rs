//! Policy record and builder
//!
//! The policy is the anchor record of the workbench: claims reference it,
//! the assistant renders it, and the dashboard aggregates over it. Unlike a
//! full policy-administration system there is no lifecycle state machine
//! here: status is a plain enumerated field that moves freely, matching how
//! the workbench is operated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::{Money, PolicyId};

use crate::customer::Customer;
use crate::error::PolicyError;
use crate::product::{ProductDetail, ProductLine};

/// Policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Lapsed,
    Cancelled,
}

impl PolicyStatus {
    /// All statuses, in reference order
    pub const ALL: [PolicyStatus; 3] = [
        PolicyStatus::Active,
        PolicyStatus::Lapsed,
        PolicyStatus::Cancelled,
    ];
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyStatus::Active => write!(f, "Active"),
            PolicyStatus::Lapsed => write!(f, "Lapsed"),
            PolicyStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Underwriting risk tier assigned to the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Standard,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Standard => write!(f, "Standard"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// An insurance policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    id: PolicyId,
    policy_number: String,
    status: PolicyStatus,
    start_date: NaiveDate,
    end_date: NaiveDate,
    customer: Customer,
    risk_tier: RiskTier,
    excess: Money,
    annual_premium: Money,
    detail: ProductDetail,
    notes: Vec<String>,
}

impl Policy {
    /// Returns the policy ID
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns the human-readable policy number
    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    /// Returns the product line, derived from the detail union
    pub fn product(&self) -> ProductLine {
        self.detail.product()
    }

    /// Returns the current status
    pub fn status(&self) -> PolicyStatus {
        self.status
    }

    /// Returns true if the policy is currently active
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Returns the cover start date
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the cover end date
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the insured customer
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Returns the risk tier
    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    /// Returns the policy excess
    pub fn excess(&self) -> Money {
        self.excess
    }

    /// Returns the annual premium
    pub fn annual_premium(&self) -> Money {
        self.annual_premium
    }

    /// Returns the product-specific coverage and asset detail
    pub fn detail(&self) -> &ProductDetail {
        &self.detail
    }

    /// Returns the free-text policy notes
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Merges the set fields of `update` into this policy.
    ///
    /// Unset (`None`) fields are left untouched.
    pub fn apply(&mut self, update: PolicyUpdate) {
        if let Some(policy_number) = update.policy_number {
            self.policy_number = policy_number;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(customer) = update.customer {
            self.customer = customer;
        }
        if let Some(risk_tier) = update.risk_tier {
            self.risk_tier = risk_tier;
        }
        if let Some(excess) = update.excess {
            self.excess = excess;
        }
        if let Some(annual_premium) = update.annual_premium {
            self.annual_premium = annual_premium;
        }
        if let Some(detail) = update.detail {
            self.detail = detail;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}

/// Partial update to a policy; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyUpdate {
    pub policy_number: Option<String>,
    pub status: Option<PolicyStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub customer: Option<Customer>,
    pub risk_tier: Option<RiskTier>,
    pub excess: Option<Money>,
    pub annual_premium: Option<Money>,
    pub detail: Option<ProductDetail>,
    pub notes: Option<Vec<String>>,
}

impl PolicyUpdate {
    /// Shorthand for a status-only update
    pub fn status(status: PolicyStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Builder for creating policies
///
/// Generates the policy id and, when none is supplied, a product-prefixed
/// policy number. Customer contact details and the cover period are
/// validated at build time.
pub struct PolicyBuilder {
    policy_number: Option<String>,
    status: PolicyStatus,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    customer: Option<Customer>,
    risk_tier: RiskTier,
    excess: Option<Money>,
    annual_premium: Option<Money>,
    detail: Option<ProductDetail>,
    notes: Vec<String>,
}

impl PolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            policy_number: None,
            status: PolicyStatus::Active,
            start_date: None,
            end_date: None,
            customer: None,
            risk_tier: RiskTier::Standard,
            excess: None,
            annual_premium: None,
            detail: None,
            notes: Vec::new(),
        }
    }

    /// Sets an explicit policy number (otherwise generated)
    pub fn policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = Some(number.into());
        self
    }

    /// Sets the status (defaults to Active)
    pub fn status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the cover period
    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the insured customer
    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Sets the risk tier (defaults to Standard)
    pub fn risk_tier(mut self, tier: RiskTier) -> Self {
        self.risk_tier = tier;
        self
    }

    /// Sets the policy excess
    pub fn excess(mut self, excess: Money) -> Self {
        self.excess = Some(excess);
        self
    }

    /// Sets the annual premium
    pub fn annual_premium(mut self, premium: Money) -> Self {
        self.annual_premium = Some(premium);
        self
    }

    /// Sets the product-specific coverage and asset detail
    pub fn detail(mut self, detail: ProductDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Appends a free-text note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Builds the policy
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the cover period is
    /// inverted, or the customer's contact details fail validation.
    pub fn build(self) -> Result<Policy, PolicyError> {
        let detail = self
            .detail
            .ok_or(PolicyError::MissingRequiredField("detail".to_string()))?;
        let customer = self
            .customer
            .ok_or(PolicyError::MissingRequiredField("customer".to_string()))?;
        let start_date = self
            .start_date
            .ok_or(PolicyError::MissingRequiredField("start_date".to_string()))?;
        let end_date = self
            .end_date
            .ok_or(PolicyError::MissingRequiredField("end_date".to_string()))?;
        let excess = self
            .excess
            .ok_or(PolicyError::MissingRequiredField("excess".to_string()))?;
        let annual_premium = self.annual_premium.ok_or(PolicyError::MissingRequiredField(
            "annual_premium".to_string(),
        ))?;

        if end_date <= start_date {
            return Err(PolicyError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }

        customer
            .validate()
            .map_err(|e| PolicyError::InvalidCustomer(e.to_string()))?;

        let policy_number = self
            .policy_number
            .unwrap_or_else(|| generate_policy_number(detail.product()));

        Ok(Policy {
            id: PolicyId::new_v7(),
            policy_number,
            status: self.status,
            start_date,
            end_date,
            customer,
            risk_tier: self.risk_tier,
            excess,
            annual_premium,
            detail,
            notes: self.notes,
        })
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a policy number in the book's format, e.g. `MTR-UK-104983`
fn generate_policy_number(product: ProductLine) -> String {
    let prefix = match product {
        ProductLine::Motor => "MTR",
        ProductLine::Home => "HOM",
    };
    format!("{}-UK-{:06}", prefix, sequence())
}

/// Pseudo-random six-digit sequence derived from the system clock
fn sequence() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 900_000 + 100_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{MotorCoverage, VehicleAsset};
    use rust_decimal_macros::dec;

    fn motor_detail() -> ProductDetail {
        ProductDetail::Motor {
            coverage: MotorCoverage {
                cover: "Comprehensive".to_string(),
                windscreen: true,
                courtesy_car: true,
                personal_injury: true,
            },
            vehicle: VehicleAsset {
                registration: "LK65 ZRT".to_string(),
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2021,
            },
        }
    }

    fn test_customer() -> Customer {
        Customer::new(
            "Northbridge Life Ltd",
            "ops@northbridge.example",
            "+44 20 7946 0101",
            "2 London Wall, London, EC2Y",
        )
    }

    fn build_policy() -> Policy {
        PolicyBuilder::new()
            .detail(motor_detail())
            .customer(test_customer())
            .period(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
            )
            .excess(Money::gbp(dec!(250)))
            .annual_premium(Money::gbp(dec!(1280)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let policy = build_policy();
        assert_eq!(policy.status(), PolicyStatus::Active);
        assert_eq!(policy.risk_tier(), RiskTier::Standard);
        assert_eq!(policy.product(), ProductLine::Motor);
        assert!(policy.policy_number().starts_with("MTR-UK-"));
    }

    #[test]
    fn test_builder_requires_detail() {
        let result = PolicyBuilder::new()
            .customer(test_customer())
            .period(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
            )
            .excess(Money::gbp(dec!(250)))
            .annual_premium(Money::gbp(dec!(1280)))
            .build();
        assert!(matches!(result, Err(PolicyError::MissingRequiredField(f)) if f == "detail"));
    }

    #[test]
    fn test_builder_rejects_inverted_period() {
        let result = PolicyBuilder::new()
            .detail(motor_detail())
            .customer(test_customer())
            .period(
                NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            )
            .excess(Money::gbp(dec!(250)))
            .annual_premium(Money::gbp(dec!(1280)))
            .build();
        assert!(matches!(result, Err(PolicyError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_builder_rejects_invalid_customer_email() {
        let result = PolicyBuilder::new()
            .detail(motor_detail())
            .customer(Customer::new("X", "nope", "", ""))
            .period(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
            )
            .excess(Money::gbp(dec!(250)))
            .annual_premium(Money::gbp(dec!(1280)))
            .build();
        assert!(matches!(result, Err(PolicyError::InvalidCustomer(_))));
    }

    #[test]
    fn test_apply_merges_only_set_fields() {
        let mut policy = build_policy();
        let original_premium = policy.annual_premium();

        policy.apply(PolicyUpdate::status(PolicyStatus::Lapsed));

        assert_eq!(policy.status(), PolicyStatus::Lapsed);
        assert_eq!(policy.annual_premium(), original_premium);
        assert_eq!(policy.product(), ProductLine::Motor);
    }

    #[test]
    fn test_status_display_matches_reference_strings() {
        assert_eq!(PolicyStatus::Active.to_string(), "Active");
        assert_eq!(PolicyStatus::Lapsed.to_string(), "Lapsed");
        assert_eq!(PolicyStatus::Cancelled.to_string(), "Cancelled");
    }
}
