//! Assistant Responder
//!
//! Maps a free-text user query to one of a fixed set of canned replies,
//! optionally carrying a structured payload (a claim list or aggregate
//! statistics) for the widget to render.
//!
//! This is deliberately not language understanding: matching is ordered,
//! case-insensitive substring matching, first match wins. The rule order is
//! part of the observable contract: a query mentioning both claims and
//! policies must hit the claim rule, not the policy rule. Do not replace it
//! with fuzzy matching.
//!
//! The responder is a pure function of the query and a snapshot of the
//! current book ([`AssistantContext`]); it owns no state and schedules
//! nothing. Message ids, typing delays, and the running transcript belong
//! to the chat widget.

pub mod context;
pub mod intent;
pub mod response;

pub use context::{quick_actions, AssistantContext, QuickAction};
pub use intent::{classify, Intent};
pub use response::{respond, BotReply, ClaimsOverview, ReplyBody};
