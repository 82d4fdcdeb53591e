//! Store change notifications
//!
//! Every successful mutation emits exactly one event carrying an updated
//! snapshot of the affected collection. Delivery is synchronous: listeners
//! run before the mutating call returns, in subscription order, and events
//! arrive in the order the mutations were issued. There is no buffering and
//! no batching.

use serde::{Deserialize, Serialize};

use domain_claims::{Claim, Handler};
use domain_policy::Policy;

use crate::store::StoreMeta;

/// A change notification from the store
///
/// Each variant carries a copy of the collection as it stands after the
/// mutation, so listeners never need to read back into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    /// Store metadata was replaced
    MetaChanged { meta: StoreMeta },

    /// The handler roster changed
    HandlersChanged { handlers: Vec<Handler> },

    /// The policy collection changed
    PoliciesChanged { policies: Vec<Policy> },

    /// The claim collection changed, including nested document/note changes
    ClaimsChanged { claims: Vec<Claim> },
}

impl StoreEvent {
    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::MetaChanged { .. } => "MetaChanged",
            StoreEvent::HandlersChanged { .. } => "HandlersChanged",
            StoreEvent::PoliciesChanged { .. } => "PoliciesChanged",
            StoreEvent::ClaimsChanged { .. } => "ClaimsChanged",
        }
    }
}
