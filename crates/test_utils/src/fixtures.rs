//! Pre-built Test Fixtures
//!
//! Deterministic identifiers and instants so tests stay predictable and
//! failures reproduce.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{ClaimId, HandlerId, PolicyId};
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The book's as-of instant (14 Jan 2026)
    pub fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 14, 0, 0, 0).unwrap()
    }

    /// A loss instant a couple of days before the as-of instant
    pub fn loss_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 12, 17, 40, 0).unwrap()
    }

    /// An out-of-hours loss instant
    pub fn ooh_loss_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, 3, 15, 0).unwrap()
    }

    /// Standard cover start date
    pub fn cover_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    /// Standard cover end date (one year minus a day later)
    pub fn cover_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 31).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A deterministic policy id
    pub fn policy_id() -> PolicyId {
        PolicyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// A deterministic claim id
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// A deterministic handler id
    pub fn handler_id() -> HandlerId {
        HandlerId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}
