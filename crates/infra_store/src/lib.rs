//! In-Memory Data Store
//!
//! [`FnolStore`] is the sole owner of the workbench's entity collections:
//! handlers, policies, and claims, plus the store metadata. All other code
//! reads entity state through its accessors (which hand out defensive
//! copies) and changes it through its explicit mutation operations, which
//! notify subscribers synchronously, in call order.
//!
//! There is no persistence and no locking: the store lives on the UI's
//! single execution thread for the duration of the session, and every
//! mutation is one synchronous, non-interruptible step. Lookup failures are
//! ordinary data conditions, reported as `false`/`None` rather than errors.

pub mod store;
pub mod events;
pub mod reference;
pub mod stats;
pub mod search;
pub mod integrity;
pub mod fixture;

pub use store::{FnolSnapshot, FnolStore, StoreMeta};
pub use events::StoreEvent;
pub use reference::ReferenceData;
pub use stats::OpenClaimCounts;
pub use search::{SearchHit, MAX_HITS};
pub use integrity::IntegrityIssue;
