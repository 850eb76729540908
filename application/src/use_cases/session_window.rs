//! Session window tracking use case
//!
//! Owns the open/close boundary of a voting session. A session is never
//! reopened or extended; "open" is recomputed from the stored timestamps
//! on every read.

use chrono::Utc;
use plenum_domain::{
    AgendaItemId, AgendaItemRepository, DEFAULT_DURATION_MINUTES, NewVotingSession,
    SessionRepository, StoreError, VotingError, VotingSession,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case owning the voting session time window of each agenda item
pub struct SessionWindowTracker {
    agenda_items: Arc<dyn AgendaItemRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl SessionWindowTracker {
    pub fn new(
        agenda_items: Arc<dyn AgendaItemRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            agenda_items,
            sessions,
        }
    }

    /// Open the voting session of an agenda item
    ///
    /// `duration_minutes` defaults to [`DEFAULT_DURATION_MINUTES`]. Fails
    /// with `NotFound` when the agenda item does not exist and with
    /// `Conflict` when a session was ever opened for it, whether or not
    /// that session is still open.
    pub async fn open(
        &self,
        agenda_item_id: AgendaItemId,
        duration_minutes: Option<u32>,
    ) -> Result<VotingSession, VotingError> {
        self.agenda_items
            .find_by_id(agenda_item_id)
            .await?
            .ok_or(VotingError::AgendaItemNotFound(agenda_item_id))?;

        if self
            .sessions
            .find_by_agenda_item(agenda_item_id)
            .await?
            .is_some()
        {
            return Err(VotingError::SessionAlreadyOpened(agenda_item_id));
        }

        let minutes = duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
        let draft = NewVotingSession::with_duration(agenda_item_id, Utc::now(), minutes)?;

        // The pre-check above is only a fast path; the store's uniqueness
        // constraint decides racing opens.
        let session = match self.sessions.insert(draft).await {
            Ok(session) => session,
            Err(StoreError::UniqueViolation(_)) => {
                return Err(VotingError::SessionAlreadyOpened(agenda_item_id));
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened session {} for agenda item {} until {}",
            session.id(),
            agenda_item_id,
            session.closes_at()
        );
        Ok(session)
    }

    /// Resolve the session owned by an agenda item
    pub async fn get_for_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<VotingSession, VotingError> {
        let session = self
            .sessions
            .find_by_agenda_item(agenda_item_id)
            .await?
            .ok_or(VotingError::SessionNotFound(agenda_item_id))?;
        debug!("Resolved session {} for agenda item {}", session.id(), agenda_item_id);
        Ok(session)
    }
}
