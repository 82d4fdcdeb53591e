//! Reply rendering
//!
//! Reply content uses lightweight markers the widget understands:
//! `**bold**`, `• ` bullets, and `\n` line breaks.

use serde::{Deserialize, Serialize};

use domain_claims::Claim;

use crate::context::AssistantContext;
use crate::intent::{classify, Intent};

/// Aggregate claims statistics attached to an overview reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsOverview {
    /// All claims on the book
    pub total_claims: usize,
    /// Claims still open (New, In Review, Referred)
    pub pending_claims: usize,
    /// Resolved claims
    pub resolved_claims: usize,
    /// Mean age of a claim in days since it was reported, one decimal
    pub avg_processing_days: f64,
}

impl ClaimsOverview {
    /// Computes the overview from a claims snapshot
    pub fn from_claims(claims: &[Claim], as_of: chrono::DateTime<chrono::Utc>) -> Self {
        let total_claims = claims.len();
        let pending_claims = claims.iter().filter(|c| c.status.is_open()).count();
        let resolved_claims = total_claims - pending_claims;

        let avg_processing_days = if claims.is_empty() {
            0.0
        } else {
            let total_days: i64 = claims
                .iter()
                .map(|c| core_kernel::days_since(c.created_at, as_of))
                .sum();
            let mean = total_days as f64 / total_claims as f64;
            (mean * 10.0).round() / 10.0
        };

        Self {
            total_claims,
            pending_claims,
            resolved_claims,
            avg_processing_days,
        }
    }
}

/// Structured payload attached to a reply, keyed by reply kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplyBody {
    /// Plain text, nothing attached
    Text,
    /// A claim list for card rendering
    ClaimList { claims: Vec<Claim> },
    /// Aggregate statistics for tile rendering
    Stats { overview: ClaimsOverview },
}

/// One assistant reply
///
/// The widget owns message ids and timestamps; the responder only produces
/// content and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotReply {
    /// Rendered reply text with `**bold**`/bullet/newline markers
    pub content: String,
    /// Attached structured payload
    pub body: ReplyBody,
}

impl BotReply {
    fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            body: ReplyBody::Text,
        }
    }
}

/// Produces the reply for a user query against the given snapshot.
///
/// Pure: no mutation, no scheduling, no memory between calls.
pub fn respond(query: &str, ctx: &AssistantContext) -> BotReply {
    match classify(query) {
        Intent::CheckClaims => claim_status_reply(ctx),
        Intent::FileClaim => BotReply::text(FILING_INSTRUCTIONS),
        Intent::ListPolicies => policy_list_reply(ctx),
        Intent::Overview => overview_reply(ctx),
        Intent::Help => BotReply::text(CAPABILITIES),
        Intent::UploadDocuments => BotReply::text(UPLOAD_GUIDE),
        Intent::ContactHandler => handler_directory_reply(ctx),
        Intent::Greeting => BotReply::text(GREETING),
        Intent::Thanks => BotReply::text(ACKNOWLEDGEMENT),
        Intent::Unrecognised => fallback_reply(query),
    }
}

fn claim_status_reply(ctx: &AssistantContext) -> BotReply {
    BotReply {
        content: "Here are your recent claims:".to_string(),
        body: ReplyBody::ClaimList {
            claims: ctx.claims.clone(),
        },
    }
}

fn policy_list_reply(ctx: &AssistantContext) -> BotReply {
    let active: Vec<String> = ctx
        .policies
        .iter()
        .filter(|p| p.is_active())
        .map(|p| {
            format!(
                "**{}**\n   Type: {} | Status: {}\n   Expires: {} | Premium: {}/year",
                p.policy_number(),
                p.product(),
                p.status(),
                p.end_date().format("%d %b %Y"),
                p.annual_premium(),
            )
        })
        .collect();

    if active.is_empty() {
        return BotReply::text("You have no active policies on file.");
    }

    BotReply::text(format!(
        "Here are your active policies:\n\n{}\n\nWould you like to file a claim against any of these policies?",
        active.join("\n\n")
    ))
}

fn overview_reply(ctx: &AssistantContext) -> BotReply {
    let overview = ClaimsOverview::from_claims(&ctx.claims, ctx.as_of);
    let content = format!(
        "**Your Claims Summary**\n\n\
         • Total Claims: **{}**\n\
         • Pending Review: **{}**\n\
         • Resolved: **{}**\n\
         • Avg. Processing Time: **{} days**\n\n\
         Is there anything specific you'd like to know?",
        overview.total_claims,
        overview.pending_claims,
        overview.resolved_claims,
        overview.avg_processing_days,
    );
    BotReply {
        content,
        body: ReplyBody::Stats { overview },
    }
}

fn handler_directory_reply(ctx: &AssistantContext) -> BotReply {
    if ctx.handlers.is_empty() {
        return BotReply::text("No handlers are currently available. Please try again later.");
    }

    let directory: Vec<String> = ctx
        .handlers
        .iter()
        .map(|h| format!("**{}** - {} team", h.name, h.team))
        .collect();

    BotReply::text(format!(
        "**Your Claims Handlers**\n\n{}\n\nOffice hours: Mon-Fri, 9:00 AM - 5:30 PM GMT",
        directory.join("\n")
    ))
}

fn fallback_reply(query: &str) -> BotReply {
    BotReply::text(format!(
        "I understand you're asking about \"{query}\". Let me help you with that.\n\n\
         Here are some things I can assist with:\n\
         • **\"Check my claims\"** - View your claim status\n\
         • **\"File a new claim\"** - Start a new claim\n\
         • **\"Show my policies\"** - View your policies\n\
         • **\"Help\"** - Get general assistance\n\n\
         Please try one of these options or rephrase your question."
    ))
}

const FILING_INSTRUCTIONS: &str = "I can help you file a new claim! Here's what you'll need:\n\n\
    **Required Information:**\n\
    • Policy number\n\
    • Date and time of incident\n\
    • Description of what happened\n\
    • Photos or documents (if available)\n\n\
    **For Motor Claims:**\n\
    • Vehicle registration\n\
    • Other party details (if applicable)\n\
    • Police report number (if applicable)\n\n\
    **For Home Claims:**\n\
    • Location of damage\n\
    • Estimated value of loss\n\n\
    Click the \"New Claim\" button in the sidebar to start the process.";

const CAPABILITIES: &str = "**I can help you with:**\n\n\
    **Claims**\n\
    • Check claim status\n\
    • File a new claim\n\
    • Upload documents\n\
    • Track claim progress\n\n\
    **Policies**\n\
    • View your policies\n\
    • Check coverage details\n\
    • Policy renewals\n\n\
    **Support**\n\
    • Contact your handler\n\
    • Escalate an issue\n\
    • FAQs\n\n\
    Just type your question or use the quick action buttons below!";

const UPLOAD_GUIDE: &str = "**Document Upload Guide**\n\n\
    To upload documents for your claim:\n\n\
    1. Go to the **Claims** section\n\
    2. Click on your claim to open details\n\
    3. Navigate to the **Documents** tab\n\
    4. Click **Upload** and select your files\n\n\
    **Accepted formats:** PDF, JPG, PNG, DOC\n\
    **Max file size:** 10MB per file\n\n\
    Need help with a specific claim?";

const GREETING: &str = "Hello! I'm your Claims Assistant. I can help you with:\n\n\
    • Checking your claim status\n\
    • Filing a new claim\n\
    • Viewing your policies\n\
    • Uploading documents\n\n\
    What would you like to do today?";

const ACKNOWLEDGEMENT: &str =
    "You're welcome! Is there anything else I can help you with today?";
