//! Core Kernel - Foundational types and utilities for the FNOL workbench
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Money with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Temporal and text helpers shared by the presentation-facing crates

pub mod money;
pub mod identifiers;
pub mod temporal;
pub mod text;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{
    PolicyId, ClaimId, HandlerId, CustomerId, DocumentId, NoteId,
    SubscriptionId,
};
pub use temporal::days_since;
pub use text::initials;
