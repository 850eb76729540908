//! Eligibility record repository trait

use crate::agenda::value_objects::AgendaItemId;
use crate::core::error::StoreError;
use crate::eligibility::entities::{EligibilityRecord, NewEligibilityRecord};
use crate::vote::value_objects::VoterId;
use async_trait::async_trait;

/// Repository trait for cached eligibility verdicts
///
/// The cache is append-only. `insert_if_absent` gives racing first
/// evaluations of the same pair a single convergence point: whichever
/// write lands first wins and every caller observes that record.
#[async_trait]
pub trait EligibilityRecordRepository: Send + Sync {
    /// Point lookup by the composite (agenda item, voter) key
    async fn find(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: &VoterId,
    ) -> Result<Option<EligibilityRecord>, StoreError>;

    /// Store a verdict unless one already exists for the pair
    ///
    /// Returns the record that is durably stored after the call, which is
    /// the pre-existing one when the pair was already evaluated.
    async fn insert_if_absent(
        &self,
        record: NewEligibilityRecord,
    ) -> Result<EligibilityRecord, StoreError>;

    /// Remove all records of an agenda item
    async fn delete_by_agenda_item(&self, agenda_item_id: AgendaItemId)
    -> Result<(), StoreError>;
}
