//! Integration tests for the in-memory store
//!
//! Exercises the store the way the workbench views drive it: defensive
//! copies, partial updates, nested document/note mutations, derived
//! statistics, change notifications, and the seeded demo book.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use core_kernel::ClaimId;
use domain_assistant::{respond, ReplyBody};
use domain_claims::{
    Claim, ClaimDocument, ClaimNote, ClaimStatus, ClaimUpdate, DocumentUpdate, Handler,
    HandlerUpdate, LossType, Team,
};
use domain_policy::{Policy, PolicyStatus, PolicyUpdate, ProductLine};
use infra_store::{FnolStore, StoreEvent, StoreMeta};
use test_utils::{TestClaimBuilder, TestPolicyBuilder};

fn empty_store() -> FnolStore {
    FnolStore::new(StoreMeta {
        as_of: Utc.with_ymd_and_hms(2026, 1, 14, 0, 0, 0).unwrap(),
        org: "Acme Insurance UK".to_string(),
    })
}

fn motor_policy(number: &str, status: PolicyStatus) -> Policy {
    TestPolicyBuilder::new()
        .with_policy_number(number)
        .with_status(status)
        .build()
}

mod copy_isolation {
    use super::*;

    #[test]
    fn mutating_an_accessor_result_does_not_touch_the_store() {
        let mut store = empty_store();
        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let mut claim = Claim::fnol(policy.id(), LossType::Accident, Utc::now());
        claim.incident_description = "Minor bumper damage".to_string();
        store.add_policy(policy);
        store.add_claim(claim.clone());

        // scribble all over the returned copies
        let mut claims = store.claims();
        claims[0].status = ClaimStatus::Resolved;
        claims[0].incident_description = "REWRITTEN".to_string();
        claims.clear();

        let mut fetched = store.claim_by_id(claim.id).unwrap();
        fetched.risk_flags.push("HIGH_IMPACT".to_string());

        let stored = store.claim_by_id(claim.id).unwrap();
        assert_eq!(stored.status, ClaimStatus::New);
        assert_eq!(stored.incident_description, "Minor bumper damage");
        assert!(stored.risk_flags.is_empty());
        assert_eq!(store.claims().len(), 1);
    }

    #[test]
    fn handler_and_snapshot_copies_are_isolated() {
        let mut store = empty_store();
        store.add_handler(Handler::new("Mina Rahman", Team::Fnol));

        let mut roster = store.handlers();
        roster[0].name = "Nobody".to_string();

        let mut snapshot = store.snapshot();
        snapshot.handlers.clear();
        snapshot.meta.org = "Changed".to_string();

        assert_eq!(store.handlers()[0].name, "Mina Rahman");
        assert_eq!(store.meta().org, "Acme Insurance UK");
    }
}

mod update_semantics {
    use super::*;

    #[test]
    fn resolving_an_existing_claim() {
        let mut store = empty_store();
        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let claim = Claim::fnol(policy.id(), LossType::Accident, Utc::now());
        let claim_id = claim.id;
        store.add_policy(policy);
        store.add_claim(claim);

        assert!(store.update_claim(claim_id, ClaimUpdate::status(ClaimStatus::Resolved)));
        assert_eq!(
            store.claim_by_id(claim_id).unwrap().status,
            ClaimStatus::Resolved
        );
    }

    #[test]
    fn updating_a_missing_claim_changes_nothing() {
        let mut store = empty_store();
        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let claim = Claim::fnol(policy.id(), LossType::Accident, Utc::now());
        store.add_policy(policy);
        store.add_claim(claim);
        let before = store.claims();

        assert!(!store.update_claim(ClaimId::new(), ClaimUpdate::status(ClaimStatus::Resolved)));
        assert_eq!(store.claims(), before);
    }

    #[test]
    fn policy_lapse_via_partial_update() {
        let mut store = empty_store();
        let policy = motor_policy("MTR-UK-305411", PolicyStatus::Active);
        let policy_id = policy.id();
        store.add_policy(policy);

        assert!(store.update_policy(policy_id, PolicyUpdate::status(PolicyStatus::Lapsed)));
        assert_eq!(
            store.policy_by_id(policy_id).unwrap().status(),
            PolicyStatus::Lapsed
        );
        assert!(store.active_policies().is_empty());
    }

    #[test]
    fn handler_rename_and_delete() {
        let mut store = empty_store();
        let handler = Handler::new("Jon Wallace", Team::Fnol);
        let handler_id = handler.id;
        store.add_handler(handler);

        assert!(store.update_handler(
            handler_id,
            HandlerUpdate {
                name: Some("Jonathan Wallace".to_string()),
                ..HandlerUpdate::default()
            }
        ));
        assert_eq!(
            store.handler_by_id(handler_id).unwrap().name,
            "Jonathan Wallace"
        );

        assert!(store.delete_handler(handler_id));
        assert!(!store.delete_handler(handler_id));
        assert!(store.handler_by_id(handler_id).is_none());
    }
}

mod nested_mutations {
    use super::*;

    fn store_with_claim() -> (FnolStore, ClaimId) {
        let mut store = empty_store();
        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let claim = Claim::fnol(policy.id(), LossType::WaterDamage, Utc::now());
        let claim_id = claim.id;
        store.add_policy(policy);
        store.add_claim(claim);
        (store, claim_id)
    }

    #[test]
    fn add_note_appends_exactly_one() {
        let (mut store, claim_id) = store_with_claim();
        let author = Handler::new("Priya Sen", Team::Triage);
        store.add_handler(author.clone());

        let before = store.claim_notes(claim_id).len();
        assert!(store.add_claim_note(claim_id, ClaimNote::new(author.id, "Need plumber invoice.")));
        assert_eq!(store.claim_notes(claim_id).len(), before + 1);

        // return value does not depend on note content
        assert!(store.add_claim_note(claim_id, ClaimNote::new(author.id, "")));
        assert_eq!(store.claim_notes(claim_id).len(), before + 2);
    }

    #[test]
    fn add_note_to_missing_claim_fails() {
        let (mut store, _) = store_with_claim();
        let author = Handler::new("Priya Sen", Team::Triage);
        assert!(!store.add_claim_note(ClaimId::new(), ClaimNote::new(author.id, "lost")));
    }

    #[test]
    fn document_toggle_and_miss_cases() {
        let (mut store, claim_id) = store_with_claim();

        assert!(store.add_claim_document(claim_id, ClaimDocument::requested("Plumber report/invoice")));
        let doc = store.claim_documents(claim_id)[0].clone();
        assert!(!doc.received);

        assert!(store.update_claim_document(claim_id, doc.id, DocumentUpdate::received(true)));
        assert!(store.claim_documents(claim_id)[0].received);

        // unknown document within a known claim
        let ghost_doc = ClaimDocument::requested("ghost");
        assert!(!store.update_claim_document(claim_id, ghost_doc.id, DocumentUpdate::received(true)));

        // unknown claim entirely
        assert!(!store.add_claim_document(ClaimId::new(), ClaimDocument::requested("orphan")));
        assert!(store.claim_documents(ClaimId::new()).is_empty());
    }
}

mod notifications {
    use super::*;

    #[test]
    fn events_arrive_synchronously_in_mutation_order() {
        let mut store = empty_store();
        let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.event_type()));

        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let claim = Claim::fnol(policy.id(), LossType::Accident, Utc::now());
        let claim_id = claim.id;

        store.add_handler(Handler::new("Mina Rahman", Team::Fnol));
        store.add_policy(policy);
        store.add_claim(claim);
        store.update_claim(claim_id, ClaimUpdate::status(ClaimStatus::InReview));
        store.delete_claim(claim_id);

        assert_eq!(
            *seen.borrow(),
            vec![
                "HandlersChanged",
                "PoliciesChanged",
                "ClaimsChanged",
                "ClaimsChanged",
                "ClaimsChanged",
            ]
        );
    }

    #[test]
    fn failed_mutations_emit_nothing() {
        let mut store = empty_store();
        let count = Rc::new(RefCell::new(0usize));
        let sink = count.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.update_claim(ClaimId::new(), ClaimUpdate::status(ClaimStatus::Resolved));
        store.delete_claim(ClaimId::new());
        store.add_claim_note(
            ClaimId::new(),
            ClaimNote::new(Handler::new("x", Team::Fnol).id, "nope"),
        );

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn event_carries_post_mutation_snapshot() {
        let mut store = empty_store();
        let last: Rc<RefCell<Option<Vec<Claim>>>> = Rc::new(RefCell::new(None));
        let sink = last.clone();
        store.subscribe(move |event| {
            if let StoreEvent::ClaimsChanged { claims } = event {
                *sink.borrow_mut() = Some(claims.clone());
            }
        });

        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let claim = Claim::fnol(policy.id(), LossType::Fire, Utc::now());
        let claim_id = claim.id;
        store.add_policy(policy);
        store.add_claim(claim);
        store.update_claim(claim_id, ClaimUpdate::status(ClaimStatus::Referred));

        let delivered = last.borrow().clone().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].status, ClaimStatus::Referred);
    }
}

mod statistics {
    use super::*;

    #[test]
    fn workload_totals_equal_assigned_claims() {
        let store = FnolStore::seeded();
        let workload = store.handler_workload();

        let total: usize = workload.iter().map(|(_, count)| count).sum();
        let assigned = store
            .claims()
            .iter()
            .filter(|c| c.assigned_to.is_some())
            .count();
        assert_eq!(total, assigned);
        assert_eq!(assigned, 3);
    }

    #[test]
    fn statistics_track_mutations_immediately() {
        let mut store = FnolStore::seeded();
        let new_before = store
            .claim_count_by_status()
            .into_iter()
            .find(|(status, _)| *status == ClaimStatus::New)
            .map(|(_, count)| count)
            .unwrap();

        let claim_id = store.claims_by_status(ClaimStatus::New)[0].id;
        store.update_claim(claim_id, ClaimUpdate::status(ClaimStatus::Resolved));

        let new_after = store
            .claim_count_by_status()
            .into_iter()
            .find(|(status, _)| *status == ClaimStatus::New)
            .map(|(_, count)| count)
            .unwrap();
        assert_eq!(new_after, new_before - 1);
    }

    #[test]
    fn seeded_loss_type_distribution() {
        let store = FnolStore::seeded();
        let counts = store.claim_count_by_loss_type();
        assert_eq!(
            counts,
            vec![
                (LossType::Accident, 1),
                (LossType::Theft, 1),
                (LossType::WaterDamage, 1),
                (LossType::Fire, 0),
                (LossType::Storm, 1),
            ]
        );
    }

    #[test]
    fn filtered_queries_agree_with_their_statistics() {
        let store = FnolStore::seeded();

        assert_eq!(store.claims_by_loss_type(LossType::Theft).len(), 1);
        assert!(store.claims_by_loss_type(LossType::Fire).is_empty());

        let siu = store.handlers_by_team(Team::Siu)[0].clone();
        let siu_claims = store.claims_by_handler(siu.id);
        assert_eq!(siu_claims.len(), 1);
        assert_eq!(siu_claims[0].claim_number, "CLM-000744");

        assert_eq!(
            store.open_claim_counts(),
            infra_store::OpenClaimCounts { new: 2, open: 2 }
        );
    }
}

mod search {
    use super::*;

    #[test]
    fn finds_claims_through_the_customer_join() {
        let store = FnolStore::seeded();
        let hits = store.search("SilverOak");

        // the theft claim (via its policy's customer) and the policy itself
        assert!(hits.iter().any(
            |h| matches!(h, infra_store::SearchHit::Claim { title, .. } if title == "CLM-000744")
        ));
        assert!(hits.iter().any(
            |h| matches!(h, infra_store::SearchHit::Policy { title, .. } if title == "MTR-UK-305411")
        ));
    }

    #[test]
    fn empty_term_yields_nothing() {
        let store = FnolStore::seeded();
        assert!(store.search("").is_empty());
        assert!(store.search("   ").is_empty());
    }

    #[test]
    fn hits_are_capped() {
        let mut store = empty_store();
        let policy = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        for _ in 0..30 {
            let mut claim = Claim::fnol(policy.id(), LossType::Storm, Utc::now());
            claim.incident_description = "storm damage to roof".to_string();
            store.add_claim(claim);
        }
        store.add_policy(policy);

        assert_eq!(store.search("storm").len(), infra_store::MAX_HITS);
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn lapsed_policy_scenario() {
        // 2 Motor policies (one Active, one Lapsed), 1 claim against the
        // lapsed one carrying the LAPSED_POLICY flag
        let mut store = empty_store();
        let active = motor_policy("MTR-UK-104983", PolicyStatus::Active);
        let lapsed = motor_policy("MTR-UK-305411", PolicyStatus::Lapsed);
        let active_id = active.id();
        let lapsed_id = lapsed.id();

        let claim = TestClaimBuilder::against(&lapsed)
            .with_loss_type(LossType::Theft)
            .with_loss_date_time(Utc.with_ymd_and_hms(2026, 1, 11, 22, 30, 0).unwrap())
            .with_risk_flag("LAPSED_POLICY")
            .build();
        let claim_id = claim.id;

        store.add_policy(active);
        store.add_policy(lapsed);
        store.add_claim(claim);

        let active_policies = store.active_policies();
        assert_eq!(active_policies.len(), 1);
        assert_eq!(active_policies[0].id(), active_id);

        let lapsed_claims = store.claims_by_policy(lapsed_id);
        assert_eq!(lapsed_claims.len(), 1);
        assert_eq!(lapsed_claims[0].id, claim_id);
        assert!(store.claims_by_policy(active_id).is_empty());

        assert_eq!(
            store.risk_flag_by_code(&lapsed_claims[0].risk_flags[0]).label,
            "Policy not active (lapsed)"
        );
    }

    #[test]
    fn wizard_flow_files_a_claim_and_the_assistant_sees_it() {
        let mut store = FnolStore::seeded();
        let policy = store.policy_by_number("MTR-UK-104983").unwrap();

        // the wizard constructs the claim client-side; the store only appends
        let mut claim = Claim::fnol(
            policy.id(),
            LossType::Fire,
            Utc.with_ymd_and_hms(2026, 1, 13, 20, 0, 0).unwrap(),
        );
        claim.incident_description = "Engine bay fire on driveway.".to_string();
        store.add_claim(claim);

        assert_eq!(store.claims().len(), 5);

        let reply = respond("check my claim status", &store.assistant_context());
        match reply.body {
            ReplyBody::ClaimList { claims } => {
                assert_eq!(claims.len(), 5);
                assert!(claims.iter().any(|c| c.loss_type == LossType::Fire));
            }
            other => panic!("expected claim list, got {other:?}"),
        }
    }

    #[test]
    fn seeded_book_matches_the_reference_data() {
        let store = FnolStore::seeded();

        assert_eq!(store.meta().org, "Acme Insurance UK");
        assert_eq!(store.policies_by_product(ProductLine::Motor).len(), 2);
        assert_eq!(store.policies_by_product(ProductLine::Home).len(), 2);
        assert_eq!(store.policies_by_status(PolicyStatus::Lapsed).len(), 1);
        assert_eq!(store.claims_by_status(ClaimStatus::Referred).len(), 1);
        assert!(store.verify_integrity().is_empty());

        let theft = store.claim_by_number("CLM-000744").unwrap();
        let report = theft.police_report.unwrap();
        assert_eq!(report.reference.as_deref(), Some("MET-CR-118820"));
        assert_eq!(store.handlers_by_team(Team::Siu).len(), 1);
    }
}
