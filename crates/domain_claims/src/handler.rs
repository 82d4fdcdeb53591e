//! Claims handlers and their teams

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::HandlerId;

/// Operational team a handler belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// First Notice of Loss intake
    Fnol,
    /// Claim triage and review
    Triage,
    /// Special Investigation Unit
    Siu,
}

impl Team {
    /// All teams, in reference order
    pub const ALL: [Team; 3] = [Team::Fnol, Team::Triage, Team::Siu];
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Fnol => write!(f, "FNOL"),
            Team::Triage => write!(f, "Triage"),
            Team::Siu => write!(f, "SIU"),
        }
    }
}

/// A member of staff who handles claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    /// Unique identifier
    pub id: HandlerId,
    /// Display name
    pub name: String,
    /// Team membership
    pub team: Team,
}

impl Handler {
    /// Creates a handler with a fresh identifier
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Self {
            id: HandlerId::new_v7(),
            name: name.into(),
            team,
        }
    }

    /// Merges the set fields of `update` into this handler
    pub fn apply(&mut self, update: HandlerUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(team) = update.team {
            self.team = team;
        }
    }
}

/// Partial update to a handler; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandlerUpdate {
    pub name: Option<String>,
    pub team: Option<Team>,
}
