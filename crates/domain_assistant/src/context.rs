//! Snapshot context handed to the responder
//!
//! The responder is pure: everything it may render arrives here as a copy.
//! The chat widget (out of scope) builds a fresh context per message from
//! the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_claims::{Claim, Handler};
use domain_policy::Policy;

/// A point-in-time snapshot of the book for reply rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantContext {
    /// Current claims
    pub claims: Vec<Claim>,
    /// Current policies (the responder filters to active itself)
    pub policies: Vec<Policy>,
    /// Current handler roster
    pub handlers: Vec<Handler>,
    /// Reference instant for age-based statistics
    pub as_of: DateTime<Utc>,
}

impl AssistantContext {
    /// Creates a context for the given snapshot
    pub fn new(
        claims: Vec<Claim>,
        policies: Vec<Policy>,
        handlers: Vec<Handler>,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            claims,
            policies,
            handlers,
            as_of,
        }
    }
}

/// A one-tap canned query shown under the chat input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub query: &'static str,
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Check Claim Status",
        query: "Check my claim status",
    },
    QuickAction {
        label: "File New Claim",
        query: "I want to file a new claim",
    },
    QuickAction {
        label: "View My Policies",
        query: "Show my policies",
    },
    QuickAction {
        label: "Get Help",
        query: "I need help",
    },
];

/// The canned quick actions, in display order
pub fn quick_actions() -> &'static [QuickAction] {
    &QUICK_ACTIONS
}
