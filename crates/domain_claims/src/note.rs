//! Handler notes on a claim
//!
//! Notes are append-only in normal flow; there is no note edit or delete
//! operation on the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{HandlerId, NoteId};

/// A free-text note left on a claim by a handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimNote {
    /// Unique identifier
    pub id: NoteId,
    /// Handler who wrote the note
    pub author_id: HandlerId,
    /// When the note was written
    pub created_at: DateTime<Utc>,
    /// Note text
    pub text: String,
}

impl ClaimNote {
    /// Creates a note authored now
    pub fn new(author_id: HandlerId, text: impl Into<String>) -> Self {
        Self {
            id: NoteId::new_v7(),
            author_id,
            created_at: Utc::now(),
            text: text.into(),
        }
    }

    /// Creates a note with an explicit timestamp (fixtures, imports)
    pub fn at(author_id: HandlerId, created_at: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            id: NoteId::new_v7(),
            author_id,
            created_at,
            text: text.into(),
        }
    }
}
