//! Voting session repository trait

use crate::agenda::value_objects::AgendaItemId;
use crate::core::error::StoreError;
use crate::session::entities::{NewVotingSession, VotingSession};
use async_trait::async_trait;

/// Repository trait for voting sessions
///
/// The store enforces the one-session-per-agenda-item constraint: a second
/// insert for the same agenda item fails with `StoreError::UniqueViolation`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session, assigning its identity
    async fn insert(&self, session: NewVotingSession) -> Result<VotingSession, StoreError>;

    /// Look up the session owned by an agenda item
    async fn find_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<Option<VotingSession>, StoreError>;

    /// Remove the session owned by an agenda item, if any
    async fn delete_by_agenda_item(&self, agenda_item_id: AgendaItemId)
    -> Result<(), StoreError>;
}
