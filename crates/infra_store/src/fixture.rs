//! The demo book of business
//!
//! A fixed seed carried in code: one UK organisation, four handlers across
//! the FNOL/Triage/SIU teams, four policies (two Motor, two Home, one of
//! them lapsed), and four claims in various stages of handling. Everything
//! else in the workbench renders from this data until the user changes it;
//! nothing survives the session.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_claims::{
    risk::codes, Claim, ClaimDocument, ClaimNote, ClaimStatus, ClaimUpdate, Handler,
    LossType, PoliceReport, Recommendation, Team,
};
use domain_policy::{
    Customer, HomeCoverage, MotorCoverage, Policy, PolicyBuilder, PolicyStatus,
    ProductDetail, PropertyAsset, RiskTier, VehicleAsset,
};

use crate::store::{FnolStore, StoreMeta};

/// Builds the seeded demo store
pub fn demo_book() -> FnolStore {
    let mut store = FnolStore::new(StoreMeta {
        as_of: Utc.with_ymd_and_hms(2026, 1, 14, 0, 0, 0).unwrap(),
        org: "Acme Insurance UK".to_string(),
    });

    let mina = Handler::new("Mina Rahman", Team::Fnol);
    let jon = Handler::new("Jon Wallace", Team::Fnol);
    let priya = Handler::new("Priya Sen", Team::Triage);
    let patel = Handler::new("A. Patel", Team::Siu);

    let northbridge_motor = motor_policy_northbridge();
    let harbor_home = home_policy_harbor();
    let silveroak_motor = motor_policy_silveroak();
    let greenfield_home = home_policy_greenfield();

    let mut claims = vec![
        accident_claim(&northbridge_motor),
        water_damage_claim(&harbor_home, &priya),
        theft_claim(&silveroak_motor, &patel),
        storm_claim(&greenfield_home, &mina),
    ];

    for handler in [mina, jon, priya, patel] {
        store.add_handler(handler);
    }
    for policy in [northbridge_motor, harbor_home, silveroak_motor, greenfield_home] {
        store.add_policy(policy);
    }
    for claim in claims.drain(..) {
        store.add_claim(claim);
    }

    store
}

fn motor_policy_northbridge() -> Policy {
    PolicyBuilder::new()
        .policy_number("MTR-UK-104983")
        .period(date(2025, 6, 1), date(2026, 5, 31))
        .customer(Customer::new(
            "Northbridge Life Ltd",
            "ops@northbridge.example",
            "+44 20 7946 0101",
            "2 London Wall, London, EC2Y",
        ))
        .excess(Money::gbp(dec!(250)))
        .annual_premium(Money::gbp(dec!(1280)))
        .detail(ProductDetail::Motor {
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
        })
        .note("Named drivers: 2")
        .note("Telematics: No")
        .build()
        .expect("demo book fixture is valid")
}

fn home_policy_harbor() -> Policy {
    PolicyBuilder::new()
        .policy_number("HOM-UK-220771")
        .period(date(2025, 10, 12), date(2026, 10, 11))
        .customer(Customer::new(
            "Harbor Mutual",
            "finance@harbor.example",
            "+44 20 7946 0202",
            "18 Bexley Rd, Bexleyheath, DA6",
        ))
        .excess(Money::gbp(dec!(350)))
        .annual_premium(Money::gbp(dec!(980)))
        .detail(ProductDetail::Home {
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
        })
        .note("Mortgagee noted")
        .note("Previous claim: none (24m)")
        .build()
        .expect("demo book fixture is valid")
}

fn motor_policy_silveroak() -> Policy {
    PolicyBuilder::new()
        .policy_number("MTR-UK-305411")
        .status(PolicyStatus::Lapsed)
        .period(date(2024, 1, 1), date(2024, 12, 31))
        .customer(Customer::new(
            "SilverOak Pensions",
            "helpdesk@silveroaks.example",
            "+44 20 7946 0303",
            "50 Queen St, London, EC4",
        ))
        .risk_tier(RiskTier::High)
        .excess(Money::gbp(dec!(500)))
        .annual_premium(Money::gbp(dec!(1760)))
        .detail(ProductDetail::Motor {
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
        })
        .note("Policy lapsed due to non-payment")
        .note("Prior theft claim (18m)")
        .build()
        .expect("demo book fixture is valid")
}

fn home_policy_greenfield() -> Policy {
    PolicyBuilder::new()
        .policy_number("HOM-UK-881902")
        .period(date(2025, 12, 20), date(2026, 12, 19))
        .customer(Customer::new(
            "Greenfield Consulting",
            "admin@greenfield.example",
            "+44 20 7946 0404",
            "9 Station Rd, Sidcup, DA15",
        ))
        .risk_tier(RiskTier::High)
        .excess(Money::gbp(dec!(500)))
        .annual_premium(Money::gbp(dec!(1420)))
        .detail(ProductDetail::Home {
            coverage: HomeCoverage {
                buildings: true,
                contents: true,
                accidental_damage: true,
                home_emergency: false,
            },
            property: PropertyAsset {
                property_type: "Terraced".to_string(),
                year_built: 1930,
                bedrooms: 4,
            },
        })
        .note("New policy (<30 days)")
        .note("Previous insurer flagged subsidence area")
        .build()
        .expect("demo book fixture is valid")
}

fn accident_claim(policy: &Policy) -> Claim {
    let mut claim = Claim::fnol(
        policy.id(),
        LossType::Accident,
        Utc.with_ymd_and_hms(2026, 1, 12, 17, 40, 0).unwrap(),
    );
    claim.claim_number = "CLM-000742".to_string();
    claim.created_at = Utc.with_ymd_and_hms(2026, 1, 13, 9, 10, 0).unwrap();
    claim.incident_description =
        "Rear-ended at low speed in stop-start traffic. Minor bumper damage reported."
            .to_string();
    claim.estimated_impact = Money::gbp(dec!(1200));
    claim.risk_flags = vec![codes::RECENT_LOSS.to_string()];
    claim.documents = vec![
        ClaimDocument::requested("Photos of damage"),
        ClaimDocument::requested("Third party details"),
    ];
    claim
}

fn water_damage_claim(policy: &Policy, handler: &Handler) -> Claim {
    let mut claim = Claim::fnol(
        policy.id(),
        LossType::WaterDamage,
        Utc.with_ymd_and_hms(2026, 1, 10, 3, 15, 0).unwrap(),
    );
    claim.claim_number = "CLM-000743".to_string();
    claim.created_at = Utc.with_ymd_and_hms(2026, 1, 12, 8, 22, 0).unwrap();
    claim.apply(ClaimUpdate {
        status: Some(ClaimStatus::InReview),
        assigned_to: Some(Some(handler.id)),
        recommendation: Some(Recommendation::RequestDocuments),
        ..ClaimUpdate::default()
    });
    claim.incident_description =
        "Leak under kitchen sink caused damage to cabinets and flooring. Plumber attended."
            .to_string();
    claim.estimated_impact = Money::gbp(dec!(3800));
    claim.risk_flags = vec![codes::HIGH_IMPACT.to_string(), codes::OOH_TIME.to_string()];
    claim.documents = vec![
        ClaimDocument::requested("Plumber report/invoice"),
        ClaimDocument::received("Photos of damaged area"),
    ];
    claim.notes = vec![ClaimNote::at(
        handler.id,
        Utc.with_ymd_and_hms(2026, 1, 13, 10, 5, 0).unwrap(),
        "Need plumber invoice to validate cause and mitigation steps.",
    )];
    claim
}

fn theft_claim(policy: &Policy, handler: &Handler) -> Claim {
    let mut claim = Claim::fnol(
        policy.id(),
        LossType::Theft,
        Utc.with_ymd_and_hms(2026, 1, 11, 22, 30, 0).unwrap(),
    );
    claim.claim_number = "CLM-000744".to_string();
    claim.created_at = Utc.with_ymd_and_hms(2026, 1, 13, 8, 40, 0).unwrap();
    claim.apply(ClaimUpdate {
        status: Some(ClaimStatus::Referred),
        assigned_to: Some(Some(handler.id)),
        police_report: Some(Some(PoliceReport::with_reference("MET-CR-118820"))),
        recommendation: Some(Recommendation::ReferToSiu),
        ..ClaimUpdate::default()
    });
    claim.incident_description =
        "Vehicle reportedly stolen from street parking. Keys present per customer.".to_string();
    claim.estimated_impact = Money::gbp(dec!(16000));
    claim.risk_flags = vec![
        codes::LAPSED_POLICY.to_string(),
        codes::HIGH_IMPACT.to_string(),
        codes::PRIOR_THEFT.to_string(),
    ];
    claim.documents = vec![
        ClaimDocument::received("Police crime reference"),
        ClaimDocument::requested("Key statements / key audit"),
    ];
    claim.notes = vec![ClaimNote::at(
        handler.id,
        Utc.with_ymd_and_hms(2026, 1, 13, 11, 30, 0).unwrap(),
        "Check policy status at time of loss; request evidence of payment/lapse dispute.",
    )];
    claim
}

fn storm_claim(policy: &Policy, handler: &Handler) -> Claim {
    let mut claim = Claim::fnol(
        policy.id(),
        LossType::Storm,
        Utc.with_ymd_and_hms(2026, 1, 9, 14, 5, 0).unwrap(),
    );
    claim.claim_number = "CLM-000745".to_string();
    claim.created_at = Utc.with_ymd_and_hms(2026, 1, 13, 12, 12, 0).unwrap();
    claim.apply(ClaimUpdate {
        assigned_to: Some(Some(handler.id)),
        recommendation: Some(Recommendation::ReferToUnderwriting),
        ..ClaimUpdate::default()
    });
    claim.incident_description =
        "Roof tiles displaced during high winds; water ingress reported in loft.".to_string();
    claim.estimated_impact = Money::gbp(dec!(6200));
    claim.risk_flags = vec![codes::NEW_POLICY.to_string(), codes::HIGH_IMPACT.to_string()];
    claim.documents = vec![
        ClaimDocument::requested("Roofing contractor quote"),
        ClaimDocument::requested("Weather report / evidence"),
    ];
    claim
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo book fixture is valid")
}
