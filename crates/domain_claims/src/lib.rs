//! Claims Domain
//!
//! This crate models the claim records of the FNOL workbench from First
//! Notice of Loss onwards: the claim itself, its nested documents and
//! notes, the handlers who work claims, and the static risk-flag catalog.
//!
//! There is no guarded status lifecycle here: a claim's status is a plain
//! enumerated field that may be set to any value at any time, matching how
//! the workbench is operated.

pub mod claim;
pub mod document;
pub mod note;
pub mod handler;
pub mod risk;

pub use claim::{Claim, ClaimStatus, ClaimUpdate, LossType, PoliceReport, Recommendation};
pub use document::{ClaimDocument, DocumentUpdate};
pub use note::ClaimNote;
pub use handler::{Handler, HandlerUpdate, Team};
pub use risk::{risk_flag_by_code, risk_flag_catalog, risk_flag_label, RiskFlag};
