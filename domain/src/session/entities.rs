//! Voting session entities
//!
//! A session is two timestamps; whether it is open is recomputed from the
//! clock on every read. There is no scheduler and no stored boolean to go
//! stale.

use crate::agenda::value_objects::AgendaItemId;
use crate::core::error::VotingError;
use crate::session::value_objects::SessionId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session duration applied when the caller does not supply one
pub const DEFAULT_DURATION_MINUTES: u32 = 1;

/// Whether a session currently accepts votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    Open,
    Closed,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Open => write!(f, "OPEN"),
            SessionStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

/// A validated voting session awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVotingSession {
    agenda_item_id: AgendaItemId,
    opens_at: DateTime<Utc>,
    closes_at: DateTime<Utc>,
}

impl NewVotingSession {
    /// Create a session window opening at `opens_at` and lasting `minutes`
    ///
    /// Fails with `InvalidDuration` unless `minutes` is positive.
    pub fn with_duration(
        agenda_item_id: AgendaItemId,
        opens_at: DateTime<Utc>,
        minutes: u32,
    ) -> Result<Self, VotingError> {
        if minutes == 0 {
            return Err(VotingError::InvalidDuration);
        }
        Ok(Self {
            agenda_item_id,
            opens_at,
            closes_at: opens_at + Duration::minutes(i64::from(minutes)),
        })
    }

    pub fn agenda_item_id(&self) -> AgendaItemId {
        self.agenda_item_id
    }

    pub fn opens_at(&self) -> DateTime<Utc> {
        self.opens_at
    }

    pub fn closes_at(&self) -> DateTime<Utc> {
        self.closes_at
    }
}

/// A persisted voting session (Entity)
///
/// Exactly one per agenda item, ever. Never mutated after creation and
/// removed only together with its agenda item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingSession {
    id: SessionId,
    agenda_item_id: AgendaItemId,
    opens_at: DateTime<Utc>,
    closes_at: DateTime<Utc>,
}

impl VotingSession {
    /// Materialize a persisted session. Intended for store adapters.
    pub fn from_parts(id: SessionId, session: NewVotingSession) -> Self {
        Self {
            id,
            agenda_item_id: session.agenda_item_id,
            opens_at: session.opens_at,
            closes_at: session.closes_at,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn agenda_item_id(&self) -> AgendaItemId {
        self.agenda_item_id
    }

    pub fn opens_at(&self) -> DateTime<Utc> {
        self.opens_at
    }

    pub fn closes_at(&self) -> DateTime<Utc> {
        self.closes_at
    }

    /// Whether the window is open at `now`
    ///
    /// The window is right-open: the closing instant itself is closed.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now < self.closes_at
    }

    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        if self.is_open(now) {
            SessionStatus::Open
        } else {
            SessionStatus::Closed
        }
    }
}
