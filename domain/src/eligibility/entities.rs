//! Eligibility record entities
//!
//! A record is a memoized verdict keyed by (agenda item, voter). Once
//! written it is never updated; a cached UNABLE is a permanent rejection
//! for that pair and is never re-checked against the collaborator.

use crate::agenda::value_objects::AgendaItemId;
use crate::vote::value_objects::VoterId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached decision about whether a voter may vote on an agenda item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EligibilityVerdict {
    Able,
    Unable,
}

impl std::fmt::Display for EligibilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityVerdict::Able => write!(f, "ABLE"),
            EligibilityVerdict::Unable => write!(f, "UNABLE"),
        }
    }
}

/// An eligibility record awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEligibilityRecord {
    agenda_item_id: AgendaItemId,
    voter_id: VoterId,
    verdict: EligibilityVerdict,
}

impl NewEligibilityRecord {
    pub fn new(
        agenda_item_id: AgendaItemId,
        voter_id: VoterId,
        verdict: EligibilityVerdict,
    ) -> Self {
        Self {
            agenda_item_id,
            voter_id,
            verdict,
        }
    }

    pub fn agenda_item_id(&self) -> AgendaItemId {
        self.agenda_item_id
    }

    pub fn voter_id(&self) -> &VoterId {
        &self.voter_id
    }

    pub fn verdict(&self) -> EligibilityVerdict {
        self.verdict
    }
}

/// A persisted eligibility record (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRecord {
    agenda_item_id: AgendaItemId,
    voter_id: VoterId,
    verdict: EligibilityVerdict,
    created_at: DateTime<Utc>,
}

impl EligibilityRecord {
    /// Materialize a persisted record. Intended for store adapters.
    pub fn from_parts(record: NewEligibilityRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            agenda_item_id: record.agenda_item_id,
            voter_id: record.voter_id,
            verdict: record.verdict,
            created_at,
        }
    }

    pub fn agenda_item_id(&self) -> AgendaItemId {
        self.agenda_item_id
    }

    pub fn voter_id(&self) -> &VoterId {
        &self.voter_id
    }

    pub fn verdict(&self) -> EligibilityVerdict {
        self.verdict
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
