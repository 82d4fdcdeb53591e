//! Intent classification
//!
//! Ordered, case-insensitive substring rules; the first rule that matches
//! wins. Ties are broken by rule order, not by match specificity.

use serde::{Deserialize, Serialize};

/// The intent the responder recognised in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Show the current claims with their statuses
    CheckClaims,
    /// Explain how to file a new claim
    FileClaim,
    /// List the active policies
    ListPolicies,
    /// Aggregate claims statistics
    Overview,
    /// Capability overview
    Help,
    /// Document upload instructions
    UploadDocuments,
    /// Handler contact directory
    ContactHandler,
    /// Greeting
    Greeting,
    /// Acknowledgement
    Thanks,
    /// Nothing matched; fall back and echo the query
    Unrecognised,
}

/// Classifies a raw user query.
///
/// The rule order below is fixed; reordering it changes which reply a
/// mixed query receives.
pub fn classify(query: &str) -> Intent {
    let q = query.to_lowercase();
    let has = |needle: &str| q.contains(needle);

    if has("claim") && (has("status") || has("check")) {
        return Intent::CheckClaims;
    }
    if has("new claim") || has("file") || has("report") {
        return Intent::FileClaim;
    }
    if has("policy") || has("policies") {
        return Intent::ListPolicies;
    }
    if has("dashboard") || has("summary") || has("overview") {
        return Intent::Overview;
    }
    if has("help") || has("support") || has("need") {
        return Intent::Help;
    }
    if has("document") || has("upload") || has("photo") {
        return Intent::UploadDocuments;
    }
    if has("handler") || has("contact") || has("speak") {
        return Intent::ContactHandler;
    }
    if has("hello") || has("hi") || has("hey") {
        return Intent::Greeting;
    }
    if has("thank") {
        return Intent::Thanks;
    }
    Intent::Unrecognised
}
