//! Documents requested on a claim

use serde::{Deserialize, Serialize};

use core_kernel::DocumentId;

/// A document requested from (or received for) a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDocument {
    /// Unique identifier
    pub id: DocumentId,
    /// Human-readable name, e.g. "Photos of damage"
    pub name: String,
    /// Whether the document has arrived
    pub received: bool,
}

impl ClaimDocument {
    /// Creates an outstanding (not yet received) document request
    pub fn requested(name: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new_v7(),
            name: name.into(),
            received: false,
        }
    }

    /// Creates a document that has already been received
    pub fn received(name: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new_v7(),
            name: name.into(),
            received: true,
        }
    }

    /// Merges the set fields of `update` into this document
    pub fn apply(&mut self, update: DocumentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(received) = update.received {
            self.received = received;
        }
    }
}

/// Partial update to a claim document; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    pub name: Option<String>,
    pub received: Option<bool>,
}

impl DocumentUpdate {
    /// Shorthand for toggling the received flag
    pub fn received(received: bool) -> Self {
        Self {
            received: Some(received),
            ..Self::default()
        }
    }
}
