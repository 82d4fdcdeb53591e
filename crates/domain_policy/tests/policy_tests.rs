//! Unit tests for the policy domain
//!
//! Covers builder validation, the product-keyed detail union, and
//! partial-update merge semantics.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_policy::{
    Customer, HomeCoverage, MotorCoverage, Policy, PolicyBuilder, PolicyStatus,
    PolicyUpdate, ProductDetail, ProductLine, PropertyAsset, RiskTier,
    VehicleAsset,
};
use rust_decimal_macros::dec;

fn home_detail() -> ProductDetail {
    ProductDetail::Home {
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
    }
}

fn motor_detail() -> ProductDetail {
    ProductDetail::Motor {
        coverage: MotorCoverage {
            cover: "Third Party, Fire & Theft".to_string(),
            windscreen: false,
            courtesy_car: false,
            personal_injury: true,
        },
        vehicle: VehicleAsset {
            registration: "AJ18 MNO".to_string(),
            make: "BMW".to_string(),
            model: "320d".to_string(),
            year: 2018,
        },
    }
}

fn home_policy() -> Policy {
    PolicyBuilder::new()
        .policy_number("HOM-UK-220771")
        .detail(home_detail())
        .customer(Customer::new(
            "Harbor Mutual",
            "finance@harbor.example",
            "+44 20 7946 0202",
            "18 Bexley Rd, Bexleyheath, DA6",
        ))
        .period(
            NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(),
        )
        .excess(Money::gbp(dec!(350)))
        .annual_premium(Money::gbp(dec!(980)))
        .note("Mortgagee noted")
        .build()
        .unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn explicit_policy_number_is_kept() {
        assert_eq!(home_policy().policy_number(), "HOM-UK-220771");
    }

    #[test]
    fn generated_number_carries_product_prefix() {
        let policy = PolicyBuilder::new()
            .detail(home_detail())
            .customer(Customer::new("Harbor Mutual", "finance@harbor.example", "", ""))
            .period(
                NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
                NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(),
            )
            .excess(Money::gbp(dec!(350)))
            .annual_premium(Money::gbp(dec!(980)))
            .build()
            .unwrap();
        assert!(policy.policy_number().starts_with("HOM-UK-"));
        assert_eq!(policy.policy_number().len(), "HOM-UK-".len() + 6);
    }

    #[test]
    fn product_is_derived_from_detail() {
        assert_eq!(home_policy().product(), ProductLine::Home);
    }

    #[test]
    fn notes_are_carried() {
        assert_eq!(home_policy().notes(), ["Mortgagee noted"]);
    }

    #[test]
    fn distinct_builds_get_distinct_ids() {
        assert_ne!(home_policy().id(), home_policy().id());
    }
}

mod updates {
    use super::*;

    #[test]
    fn lapsing_a_policy_keeps_everything_else() {
        let mut policy = home_policy();
        let before = policy.clone();

        policy.apply(PolicyUpdate::status(PolicyStatus::Lapsed));

        assert_eq!(policy.status(), PolicyStatus::Lapsed);
        assert!(!policy.is_active());
        assert_eq!(policy.customer(), before.customer());
        assert_eq!(policy.detail(), before.detail());
        assert_eq!(policy.annual_premium(), before.annual_premium());
    }

    #[test]
    fn detail_replacement_switches_product() {
        let mut policy = home_policy();
        policy.apply(PolicyUpdate {
            detail: Some(motor_detail()),
            ..PolicyUpdate::default()
        });
        assert_eq!(policy.product(), ProductLine::Motor);
    }

    #[test]
    fn risk_tier_update() {
        let mut policy = home_policy();
        policy.apply(PolicyUpdate {
            risk_tier: Some(RiskTier::High),
            ..PolicyUpdate::default()
        });
        assert_eq!(policy.risk_tier(), RiskTier::High);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut policy = home_policy();
        let before = policy.clone();
        policy.apply(PolicyUpdate::default());
        assert_eq!(policy, before);
    }
}
