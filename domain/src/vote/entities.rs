//! Vote entities

use crate::agenda::value_objects::AgendaItemId;
use crate::vote::value_objects::{VoteId, VoterId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two-valued vote choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteValue {
    Yes,
    No,
}

impl std::fmt::Display for VoteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteValue::Yes => write!(f, "YES"),
            VoteValue::No => write!(f, "NO"),
        }
    }
}

/// A vote awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVote {
    agenda_item_id: AgendaItemId,
    voter_id: VoterId,
    value: VoteValue,
}

impl NewVote {
    pub fn new(agenda_item_id: AgendaItemId, voter_id: VoterId, value: VoteValue) -> Self {
        Self {
            agenda_item_id,
            voter_id,
            value,
        }
    }

    pub fn agenda_item_id(&self) -> AgendaItemId {
        self.agenda_item_id
    }

    pub fn voter_id(&self) -> &VoterId {
        &self.voter_id
    }

    pub fn value(&self) -> VoteValue {
        self.value
    }
}

/// A persisted vote (Entity)
///
/// Immutable once created; at most one exists per (agenda item, voter) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    id: VoteId,
    agenda_item_id: AgendaItemId,
    voter_id: VoterId,
    value: VoteValue,
    created_at: DateTime<Utc>,
}

impl Vote {
    /// Materialize a persisted vote. Intended for store adapters.
    pub fn from_parts(id: VoteId, vote: NewVote, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            agenda_item_id: vote.agenda_item_id,
            voter_id: vote.voter_id,
            value: vote.value,
            created_at,
        }
    }

    pub fn id(&self) -> VoteId {
        self.id
    }

    pub fn agenda_item_id(&self) -> AgendaItemId {
        self.agenda_item_id
    }

    pub fn voter_id(&self) -> &VoterId {
        &self.voter_id
    }

    pub fn value(&self) -> VoteValue {
        self.value
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
