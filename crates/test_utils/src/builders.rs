//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about and take defaults for
//! everything else.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal_macros::dec;

use core_kernel::{HandlerId, Money, PolicyId};
use domain_claims::{Claim, ClaimStatus, ClaimUpdate, Handler, LossType, Team};
use domain_policy::{
    Customer, HomeCoverage, MotorCoverage, Policy, PolicyBuilder, PolicyStatus,
    ProductDetail, ProductLine, PropertyAsset, RiskTier, VehicleAsset,
};

use crate::fixtures::TemporalFixtures;

/// Builder for test policies; defaults to an active Motor policy
pub struct TestPolicyBuilder {
    policy_number: Option<String>,
    product: ProductLine,
    status: PolicyStatus,
    risk_tier: RiskTier,
    start_date: NaiveDate,
    end_date: NaiveDate,
    customer_name: String,
    excess: Money,
    annual_premium: Money,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            policy_number: None,
            product: ProductLine::Motor,
            status: PolicyStatus::Active,
            risk_tier: RiskTier::Standard,
            start_date: TemporalFixtures::cover_start(),
            end_date: TemporalFixtures::cover_end(),
            customer_name: "Northbridge Life Ltd".to_string(),
            excess: Money::gbp(dec!(250)),
            annual_premium: Money::gbp(dec!(1280)),
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = Some(number.into());
        self
    }

    /// Switches the policy to the Home product line
    pub fn home(mut self) -> Self {
        self.product = ProductLine::Home;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Shorthand for a lapsed policy
    pub fn lapsed(self) -> Self {
        self.with_status(PolicyStatus::Lapsed)
    }

    /// Sets the risk tier
    pub fn with_risk_tier(mut self, tier: RiskTier) -> Self {
        self.risk_tier = tier;
        self
    }

    /// Sets the cover period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the customer name
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Sets the annual premium
    pub fn with_annual_premium(mut self, premium: Money) -> Self {
        self.annual_premium = premium;
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        let detail = match self.product {
            ProductLine::Motor => ProductDetail::Motor {
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
            },
            ProductLine::Home => ProductDetail::Home {
                coverage: HomeCoverage {
                    buildings: true,
                    contents: true,
                    accidental_damage: false,
                    home_emergency: true,
                },
                property: PropertyAsset {
                    property_type: "Semi-detached".to_string(),
                    year_built: 1989,
                    bedrooms: 3,
                },
            },
        };

        let mut builder = PolicyBuilder::new()
            .status(self.status)
            .risk_tier(self.risk_tier)
            .period(self.start_date, self.end_date)
            .customer(Customer::new(
                self.customer_name,
                "test@customer.example",
                "+44 20 7946 0000",
                "1 Test Street, London",
            ))
            .excess(self.excess)
            .annual_premium(self.annual_premium)
            .detail(detail);

        if let Some(number) = self.policy_number {
            builder = builder.policy_number(number);
        }

        builder.build().expect("test policy data is valid")
    }
}

/// Builder for test claims; defaults to a fresh unassigned Accident FNOL
pub struct TestClaimBuilder {
    policy_id: PolicyId,
    loss_type: LossType,
    loss_date_time: DateTime<Utc>,
    status: ClaimStatus,
    assigned_to: Option<HandlerId>,
    estimated_impact: Money,
    incident_description: String,
    risk_flags: Vec<String>,
}

impl TestClaimBuilder {
    /// Creates a builder for a claim against the given policy
    pub fn against(policy: &Policy) -> Self {
        Self {
            policy_id: policy.id(),
            loss_type: LossType::Accident,
            loss_date_time: TemporalFixtures::loss_instant(),
            status: ClaimStatus::New,
            assigned_to: None,
            estimated_impact: Money::gbp(dec!(1200)),
            incident_description: "Rear-ended at low speed in stop-start traffic.".to_string(),
            risk_flags: Vec::new(),
        }
    }

    /// Sets the loss type
    pub fn with_loss_type(mut self, loss_type: LossType) -> Self {
        self.loss_type = loss_type;
        self
    }

    /// Sets the loss instant
    pub fn with_loss_date_time(mut self, instant: DateTime<Utc>) -> Self {
        self.loss_date_time = instant;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Assigns the claim to a handler
    pub fn assigned_to(mut self, handler_id: HandlerId) -> Self {
        self.assigned_to = Some(handler_id);
        self
    }

    /// Sets the estimated impact
    pub fn with_estimated_impact(mut self, impact: Money) -> Self {
        self.estimated_impact = impact;
        self
    }

    /// Sets the incident description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.incident_description = description.into();
        self
    }

    /// Adds a risk-flag code
    pub fn with_risk_flag(mut self, code: impl Into<String>) -> Self {
        self.risk_flags.push(code.into());
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let mut claim = Claim::fnol(self.policy_id, self.loss_type, self.loss_date_time);
        claim.apply(ClaimUpdate {
            status: Some(self.status),
            assigned_to: Some(self.assigned_to),
            ..ClaimUpdate::default()
        });
        claim.estimated_impact = self.estimated_impact;
        claim.incident_description = self.incident_description;
        claim.risk_flags = self.risk_flags;
        claim
    }
}

/// Creates the standard four-person test roster
pub fn test_roster() -> Vec<Handler> {
    vec![
        Handler::new("Mina Rahman", Team::Fnol),
        Handler::new("Jon Wallace", Team::Fnol),
        Handler::new("Priya Sen", Team::Triage),
        Handler::new("A. Patel", Team::Siu),
    ]
}
