//! The in-memory data store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{ClaimId, HandlerId, PolicyId, SubscriptionId};
use domain_assistant::AssistantContext;
use domain_claims::{
    risk_flag_by_code, Claim, ClaimDocument, ClaimNote, ClaimStatus, ClaimUpdate,
    DocumentUpdate, Handler, HandlerUpdate, LossType, Recommendation, RiskFlag, Team,
};
use domain_policy::{Policy, PolicyStatus, PolicyUpdate, ProductLine};

use crate::events::StoreEvent;
use crate::integrity::{self, IntegrityIssue};
use crate::reference::ReferenceData;
use crate::search::{self, SearchHit};
use crate::stats::{self, OpenClaimCounts};

/// Store metadata: the organisation and the as-of instant of the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMeta {
    pub as_of: DateTime<Utc>,
    pub org: String,
}

/// A deep copy of everything the store holds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FnolSnapshot {
    pub meta: StoreMeta,
    pub reference: ReferenceData,
    pub handlers: Vec<Handler>,
    pub policies: Vec<Policy>,
    pub claims: Vec<Claim>,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// The in-memory repository of handlers, policies, and claims
///
/// Reads take `&self` and return copies; callers may mutate what they get
/// back without affecting stored state. All changes go through the explicit
/// mutation operations, which take `&mut self`, apply one synchronous step,
/// and notify subscribers before returning.
///
/// Lookup misses are ordinary outcomes: updates and deletes return `false`,
/// lookups return `None`, and nothing panics or throws.
pub struct FnolStore {
    meta: StoreMeta,
    handlers: Vec<Handler>,
    policies: Vec<Policy>,
    claims: Vec<Claim>,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for FnolStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnolStore")
            .field("meta", &self.meta)
            .field("handlers", &self.handlers.len())
            .field("policies", &self.policies.len())
            .field("claims", &self.claims.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FnolStore {
    /// Creates an empty store
    pub fn new(meta: StoreMeta) -> Self {
        Self {
            meta,
            handlers: Vec::new(),
            policies: Vec::new(),
            claims: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Creates a store seeded with the demo book of business
    pub fn seeded() -> Self {
        crate::fixture::demo_book()
    }

    // ============ subscriptions ============

    /// Registers a change listener; events are delivered synchronously, in
    /// mutation order, until the subscription is removed.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new_v7();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns false if the subscription is unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub_id, _)| *sub_id != id);
        self.listeners.len() < before
    }

    fn emit(&mut self, event: StoreEvent) {
        debug!(event = event.event_type(), "store change");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn emit_handlers(&mut self) {
        let event = StoreEvent::HandlersChanged {
            handlers: self.handlers.clone(),
        };
        self.emit(event);
    }

    fn emit_policies(&mut self) {
        let event = StoreEvent::PoliciesChanged {
            policies: self.policies.clone(),
        };
        self.emit(event);
    }

    fn emit_claims(&mut self) {
        let event = StoreEvent::ClaimsChanged {
            claims: self.claims.clone(),
        };
        self.emit(event);
    }

    // ============ meta ============

    /// Returns a copy of the store metadata
    pub fn meta(&self) -> StoreMeta {
        self.meta.clone()
    }

    /// Replaces the store metadata
    pub fn set_meta(&mut self, meta: StoreMeta) {
        self.meta = meta;
        let event = StoreEvent::MetaChanged {
            meta: self.meta.clone(),
        };
        self.emit(event);
    }

    // ============ reference ============

    /// Returns the static reference lists
    pub fn reference(&self) -> ReferenceData {
        ReferenceData::current()
    }

    /// Product lines, in reference order
    pub fn products(&self) -> Vec<ProductLine> {
        ProductLine::ALL.to_vec()
    }

    /// Loss types, in reference order
    pub fn loss_types(&self) -> Vec<LossType> {
        LossType::ALL.to_vec()
    }

    /// Claim statuses, in reference order
    pub fn claim_statuses(&self) -> Vec<ClaimStatus> {
        ClaimStatus::ALL.to_vec()
    }

    /// Triage recommendations, in reference order
    pub fn recommendations(&self) -> Vec<Recommendation> {
        Recommendation::ALL.to_vec()
    }

    /// The risk-flag catalog
    pub fn risk_flag_catalog(&self) -> Vec<RiskFlag> {
        domain_claims::risk_flag_catalog().to_vec()
    }

    /// Resolves a risk-flag code; unknown codes label as themselves
    pub fn risk_flag_by_code(&self, code: &str) -> RiskFlag {
        risk_flag_by_code(code)
    }

    // ============ handlers ============

    /// Returns a copy of the handler roster
    pub fn handlers(&self) -> Vec<Handler> {
        self.handlers.clone()
    }

    /// Returns the handler with the given id, if present
    pub fn handler_by_id(&self, id: HandlerId) -> Option<Handler> {
        self.handlers.iter().find(|h| h.id == id).cloned()
    }

    /// Returns the handlers on the given team
    pub fn handlers_by_team(&self, team: Team) -> Vec<Handler> {
        self.handlers.iter().filter(|h| h.team == team).cloned().collect()
    }

    /// Appends a handler to the roster
    pub fn add_handler(&mut self, handler: Handler) {
        debug!(handler = %handler.id, "handler added");
        self.handlers.push(handler);
        self.emit_handlers();
    }

    /// Merges `update` into the handler with the given id.
    ///
    /// Returns false, changing nothing and emitting nothing, when the id
    /// is unknown.
    pub fn update_handler(&mut self, id: HandlerId, update: HandlerUpdate) -> bool {
        let Some(handler) = self.handlers.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        handler.apply(update);
        self.emit_handlers();
        true
    }

    /// Removes the handler with the given id; returns false when unknown
    pub fn delete_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|h| h.id != id);
        if self.handlers.len() == before {
            return false;
        }
        debug!(handler = %id, "handler deleted");
        self.emit_handlers();
        true
    }

    // ============ policies ============

    /// Returns a copy of the policy collection
    pub fn policies(&self) -> Vec<Policy> {
        self.policies.clone()
    }

    /// Returns the policy with the given id, if present
    pub fn policy_by_id(&self, id: PolicyId) -> Option<Policy> {
        self.policies.iter().find(|p| p.id() == id).cloned()
    }

    /// Returns the policy with the given policy number, if present
    pub fn policy_by_number(&self, number: &str) -> Option<Policy> {
        self.policies.iter().find(|p| p.policy_number() == number).cloned()
    }

    /// Returns the policies on the given product line
    pub fn policies_by_product(&self, product: ProductLine) -> Vec<Policy> {
        self.policies.iter().filter(|p| p.product() == product).cloned().collect()
    }

    /// Returns the policies in the given status
    pub fn policies_by_status(&self, status: PolicyStatus) -> Vec<Policy> {
        self.policies.iter().filter(|p| p.status() == status).cloned().collect()
    }

    /// Returns the active policies
    pub fn active_policies(&self) -> Vec<Policy> {
        self.policies_by_status(PolicyStatus::Active)
    }

    /// Appends a policy to the collection
    pub fn add_policy(&mut self, policy: Policy) {
        debug!(policy = %policy.id(), number = policy.policy_number(), "policy added");
        self.policies.push(policy);
        self.emit_policies();
    }

    /// Merges `update` into the policy with the given id.
    ///
    /// Returns false, changing nothing and emitting nothing, when the id
    /// is unknown.
    pub fn update_policy(&mut self, id: PolicyId, update: PolicyUpdate) -> bool {
        let Some(policy) = self.policies.iter_mut().find(|p| p.id() == id) else {
            return false;
        };
        policy.apply(update);
        self.emit_policies();
        true
    }

    /// Removes the policy with the given id; returns false when unknown
    pub fn delete_policy(&mut self, id: PolicyId) -> bool {
        let before = self.policies.len();
        self.policies.retain(|p| p.id() != id);
        if self.policies.len() == before {
            return false;
        }
        debug!(policy = %id, "policy deleted");
        self.emit_policies();
        true
    }

    // ============ claims ============

    /// Returns a copy of the claim collection
    pub fn claims(&self) -> Vec<Claim> {
        self.claims.clone()
    }

    /// Returns the claim with the given id, if present
    pub fn claim_by_id(&self, id: ClaimId) -> Option<Claim> {
        self.claims.iter().find(|c| c.id == id).cloned()
    }

    /// Returns the claim with the given claim number, if present
    pub fn claim_by_number(&self, number: &str) -> Option<Claim> {
        self.claims.iter().find(|c| c.claim_number == number).cloned()
    }

    /// Returns the claims made against the given policy
    pub fn claims_by_policy(&self, policy_id: PolicyId) -> Vec<Claim> {
        self.claims.iter().filter(|c| c.policy_id == policy_id).cloned().collect()
    }

    /// Returns the claims in the given status
    pub fn claims_by_status(&self, status: ClaimStatus) -> Vec<Claim> {
        self.claims.iter().filter(|c| c.status == status).cloned().collect()
    }

    /// Returns the claims with the given loss type
    pub fn claims_by_loss_type(&self, loss_type: LossType) -> Vec<Claim> {
        self.claims.iter().filter(|c| c.loss_type == loss_type).cloned().collect()
    }

    /// Returns the claims assigned to the given handler
    pub fn claims_by_handler(&self, handler_id: HandlerId) -> Vec<Claim> {
        self.claims
            .iter()
            .filter(|c| c.is_assigned_to(handler_id))
            .cloned()
            .collect()
    }

    /// Returns the claims with no assigned handler
    pub fn unassigned_claims(&self) -> Vec<Claim> {
        self.claims.iter().filter(|c| c.assigned_to.is_none()).cloned().collect()
    }

    /// Appends a claim to the collection.
    ///
    /// The claim is taken as given: the wizard flow constructs it and
    /// generates its id. Dangling policy or handler references are accepted
    /// but logged; `verify_integrity` reports them.
    pub fn add_claim(&mut self, claim: Claim) {
        if !self.policies.iter().any(|p| p.id() == claim.policy_id) {
            warn!(claim = %claim.id, policy = %claim.policy_id, "claim references unknown policy");
        }
        if let Some(handler_id) = claim.assigned_to {
            if !self.handlers.iter().any(|h| h.id == handler_id) {
                warn!(claim = %claim.id, handler = %handler_id, "claim assigned to unknown handler");
            }
        }
        debug!(claim = %claim.id, number = claim.claim_number.as_str(), "claim added");
        self.claims.push(claim);
        self.emit_claims();
    }

    /// Merges `update` into the claim with the given id.
    ///
    /// Returns false, changing nothing and emitting nothing, when the id
    /// is unknown.
    pub fn update_claim(&mut self, id: ClaimId, update: ClaimUpdate) -> bool {
        let Some(claim) = self.claims.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        claim.apply(update);
        self.emit_claims();
        true
    }

    /// Removes the claim with the given id; returns false when unknown
    pub fn delete_claim(&mut self, id: ClaimId) -> bool {
        let before = self.claims.len();
        self.claims.retain(|c| c.id != id);
        if self.claims.len() == before {
            return false;
        }
        debug!(claim = %id, "claim deleted");
        self.emit_claims();
        true
    }

    // ============ claim documents ============

    /// Returns the documents on a claim; empty when the claim is unknown
    pub fn claim_documents(&self, claim_id: ClaimId) -> Vec<ClaimDocument> {
        self.claims
            .iter()
            .find(|c| c.id == claim_id)
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    /// Appends a document to a claim; returns false when the claim is unknown
    pub fn add_claim_document(&mut self, claim_id: ClaimId, document: ClaimDocument) -> bool {
        let Some(claim) = self.claims.iter_mut().find(|c| c.id == claim_id) else {
            return false;
        };
        claim.documents.push(document);
        self.emit_claims();
        true
    }

    /// Merges `update` into a document on a claim.
    ///
    /// Returns false when either the claim or the document within it is
    /// unknown.
    pub fn update_claim_document(
        &mut self,
        claim_id: ClaimId,
        document_id: core_kernel::DocumentId,
        update: DocumentUpdate,
    ) -> bool {
        let Some(claim) = self.claims.iter_mut().find(|c| c.id == claim_id) else {
            return false;
        };
        let Some(document) = claim.documents.iter_mut().find(|d| d.id == document_id) else {
            return false;
        };
        document.apply(update);
        self.emit_claims();
        true
    }

    // ============ claim notes ============

    /// Returns the notes on a claim; empty when the claim is unknown
    pub fn claim_notes(&self, claim_id: ClaimId) -> Vec<ClaimNote> {
        self.claims
            .iter()
            .find(|c| c.id == claim_id)
            .map(|c| c.notes.clone())
            .unwrap_or_default()
    }

    /// Appends a note to a claim; returns false when the claim is unknown.
    ///
    /// Notes are append-only: there is deliberately no update or delete.
    pub fn add_claim_note(&mut self, claim_id: ClaimId, note: ClaimNote) -> bool {
        let Some(claim) = self.claims.iter_mut().find(|c| c.id == claim_id) else {
            return false;
        };
        claim.notes.push(note);
        self.emit_claims();
        true
    }

    // ============ snapshots ============

    /// Returns a deep copy of everything the store holds
    pub fn snapshot(&self) -> FnolSnapshot {
        FnolSnapshot {
            meta: self.meta.clone(),
            reference: ReferenceData::current(),
            handlers: self.handlers.clone(),
            policies: self.policies.clone(),
            claims: self.claims.clone(),
        }
    }

    /// Builds the responder's snapshot context from current state
    pub fn assistant_context(&self) -> AssistantContext {
        AssistantContext::new(
            self.claims.clone(),
            self.policies.clone(),
            self.handlers.clone(),
            self.meta.as_of,
        )
    }

    // ============ statistics ============

    /// Number of claims in each status, in reference order
    pub fn claim_count_by_status(&self) -> Vec<(ClaimStatus, usize)> {
        stats::claim_count_by_status(&self.claims)
    }

    /// Number of claims for each loss type, in reference order
    pub fn claim_count_by_loss_type(&self) -> Vec<(LossType, usize)> {
        stats::claim_count_by_loss_type(&self.claims)
    }

    /// Number of claims assigned to each handler, in roster order
    pub fn handler_workload(&self) -> Vec<(Handler, usize)> {
        stats::handler_workload(&self.handlers, &self.claims)
    }

    /// Sum of the estimated impact across all claims
    pub fn total_estimated_impact(&self) -> core_kernel::Money {
        stats::total_estimated_impact(&self.claims)
    }

    /// New vs In Review + Referred counts for the dashboard tiles
    pub fn open_claim_counts(&self) -> OpenClaimCounts {
        stats::open_claim_counts(&self.claims)
    }

    // ============ search & integrity ============

    /// Searches claims, policies, and handlers for `term`
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        search::search(term, &self.handlers, &self.policies, &self.claims)
    }

    /// Reports every cross-reference that fails to resolve
    pub fn verify_integrity(&self) -> Vec<IntegrityIssue> {
        integrity::verify(&self.handlers, &self.policies, &self.claims)
    }
}
