//! Vote tallying use case
//!
//! Read-only: counts persisted votes and reports the session status. Safe
//! to call arbitrarily often, concurrently with casting; a vote committing
//! while the counts are read may or may not be observed, which is fine
//! because the tally never feeds back into casting decisions.

use crate::use_cases::session_window::SessionWindowTracker;
use chrono::Utc;
use plenum_domain::{AgendaItemId, VoteRepository, VoteTally, VoteValue, VotingError};
use std::sync::Arc;
use tracing::debug;

/// Use case aggregating the votes of one agenda item
pub struct TallyVotesUseCase {
    tracker: Arc<SessionWindowTracker>,
    votes: Arc<dyn VoteRepository>,
}

impl TallyVotesUseCase {
    pub fn new(tracker: Arc<SessionWindowTracker>, votes: Arc<dyn VoteRepository>) -> Self {
        Self { tracker, votes }
    }

    /// Count votes by value and report the current session status
    ///
    /// Fails with `NotFound` when no session exists for the agenda item.
    pub async fn execute(&self, agenda_item_id: AgendaItemId) -> Result<VoteTally, VotingError> {
        let session = self.tracker.get_for_agenda_item(agenda_item_id).await?;
        let status = session.status(Utc::now());

        let yes = self
            .votes
            .count_by_value(agenda_item_id, VoteValue::Yes)
            .await?;
        let no = self
            .votes
            .count_by_value(agenda_item_id, VoteValue::No)
            .await?;

        let tally = VoteTally::new(agenda_item_id, yes, no, status);
        debug!(
            "Tally for agenda item {}: {} yes / {} no ({})",
            agenda_item_id, tally.yes, tally.no, tally.status
        );
        Ok(tally)
    }
}
