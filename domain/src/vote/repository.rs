//! Vote repository trait

use crate::agenda::value_objects::AgendaItemId;
use crate::core::error::StoreError;
use crate::vote::entities::{NewVote, Vote, VoteValue};
use crate::vote::value_objects::VoterId;
use async_trait::async_trait;

/// Repository trait for votes
///
/// The store enforces the (agenda item, voter) uniqueness constraint
/// atomically: of two racing inserts for the same pair exactly one
/// succeeds and the other fails with `StoreError::UniqueViolation`.
/// That constraint, not the caller's pre-check, is the source of truth
/// for exactly-once voting.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Persist a new vote, assigning identity and creation timestamp
    async fn insert(&self, vote: NewVote) -> Result<Vote, StoreError>;

    /// Point lookup by the composite (agenda item, voter) key
    async fn find_by_agenda_item_and_voter(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: &VoterId,
    ) -> Result<Option<Vote>, StoreError>;

    /// Count the votes of one agenda item holding `value`
    async fn count_by_value(
        &self,
        agenda_item_id: AgendaItemId,
        value: VoteValue,
    ) -> Result<u64, StoreError>;

    /// Remove all votes of an agenda item
    async fn delete_by_agenda_item(&self, agenda_item_id: AgendaItemId)
    -> Result<(), StoreError>;
}
