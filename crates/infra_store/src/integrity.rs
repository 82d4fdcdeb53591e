//! Referential-integrity reporting
//!
//! The store never rejects a write over a dangling reference (matching the
//! workbench's permissive behavior), so integrity is checked after the
//! fact: this report lists every cross-reference that fails to resolve.

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, HandlerId, NoteId, PolicyId};
use domain_claims::{Claim, Handler};
use domain_policy::Policy;

/// A cross-reference that does not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrityIssue {
    /// A claim references a policy that is not in the store
    MissingPolicy { claim_id: ClaimId, policy_id: PolicyId },

    /// A claim is assigned to a handler that is not on the roster
    MissingHandler {
        claim_id: ClaimId,
        handler_id: HandlerId,
    },

    /// A claim note's author is not on the roster
    UnknownNoteAuthor {
        claim_id: ClaimId,
        note_id: NoteId,
        author_id: HandlerId,
    },
}

/// Checks every claim's references against the current collections
pub fn verify(handlers: &[Handler], policies: &[Policy], claims: &[Claim]) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for claim in claims {
        if !policies.iter().any(|p| p.id() == claim.policy_id) {
            issues.push(IntegrityIssue::MissingPolicy {
                claim_id: claim.id,
                policy_id: claim.policy_id,
            });
        }

        if let Some(handler_id) = claim.assigned_to {
            if !handlers.iter().any(|h| h.id == handler_id) {
                issues.push(IntegrityIssue::MissingHandler {
                    claim_id: claim.id,
                    handler_id,
                });
            }
        }

        for note in &claim.notes {
            if !handlers.iter().any(|h| h.id == note.author_id) {
                issues.push(IntegrityIssue::UnknownNoteAuthor {
                    claim_id: claim.id,
                    note_id: note.id,
                    author_id: note.author_id,
                });
            }
        }
    }

    issues
}
