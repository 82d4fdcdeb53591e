//! Global search across claims, policies, and handlers
//!
//! Case-insensitive substring matching, the same contract the header search
//! box offers: claims match on number, loss type, description, status, or
//! the insured customer's name (joined through the claim's policy);
//! policies on number, customer name/email, product, or status; handlers on
//! name, team, or id. Hits come back typed and capped, claims first.

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, HandlerId, PolicyId};
use domain_claims::{Claim, ClaimStatus, Handler};
use domain_policy::{Policy, PolicyStatus};

/// Maximum number of hits returned by a single search
pub const MAX_HITS: usize = 15;

/// A typed search hit with render-ready title and subtitle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHit {
    Claim {
        id: ClaimId,
        title: String,
        subtitle: String,
        status: ClaimStatus,
    },
    Policy {
        id: PolicyId,
        title: String,
        subtitle: String,
        status: PolicyStatus,
    },
    Handler {
        id: HandlerId,
        title: String,
        subtitle: String,
        /// Avatar initials derived from the handler's name
        initials: String,
    },
}

/// Searches the collections for `term`.
///
/// An empty or whitespace-only term yields no hits. At most [`MAX_HITS`]
/// hits are returned, in collection order: claims, then policies, then
/// handlers.
pub fn search(
    term: &str,
    handlers: &[Handler],
    policies: &[Policy],
    claims: &[Claim],
) -> Vec<SearchHit> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    let matches = |haystack: &str| haystack.to_lowercase().contains(&term);

    let mut hits = Vec::new();

    for claim in claims {
        let customer_name = policies
            .iter()
            .find(|p| p.id() == claim.policy_id)
            .map(|p| p.customer().name.clone())
            .unwrap_or_default();

        if matches(&claim.claim_number)
            || matches(&claim.loss_type.to_string())
            || matches(&claim.incident_description)
            || matches(&claim.status.to_string())
            || matches(&customer_name)
        {
            hits.push(SearchHit::Claim {
                id: claim.id,
                title: claim.claim_number.clone(),
                subtitle: format!("{} • {}", claim.loss_type, customer_name),
                status: claim.status,
            });
        }
    }

    for policy in policies {
        if matches(policy.policy_number())
            || matches(&policy.customer().name)
            || matches(&policy.customer().email)
            || matches(&policy.product().to_string())
            || matches(&policy.status().to_string())
        {
            hits.push(SearchHit::Policy {
                id: policy.id(),
                title: policy.policy_number().to_string(),
                subtitle: format!("{} • {}", policy.product(), policy.customer().name),
                status: policy.status(),
            });
        }
    }

    for handler in handlers {
        if matches(&handler.name)
            || matches(&handler.team.to_string())
            || matches(&handler.id.to_string())
        {
            hits.push(SearchHit::Handler {
                id: handler.id,
                title: handler.name.clone(),
                subtitle: format!("{} Team", handler.team),
                initials: core_kernel::initials(&handler.name),
            });
        }
    }

    hits.truncate(MAX_HITS);
    hits
}
