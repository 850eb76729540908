//! Vote casting use case
//!
//! Orchestrates the full decision pipeline for one cast attempt:
//! resolve the agenda item, resolve its session, check the window,
//! pre-check for a duplicate, gatekeep eligibility, then insert.
//!
//! The duplicate pre-check and the insert are deliberately not wrapped in
//! one lock. The store's uniqueness constraint is the source of truth for
//! exactly-once voting; a racing duplicate slips past the pre-check, loses
//! the insert, and is mapped to the same conflict outcome.

use crate::use_cases::eligibility::EligibilityGatekeeper;
use crate::use_cases::session_window::SessionWindowTracker;
use chrono::Utc;
use plenum_domain::{
    AgendaItemId, AgendaItemRepository, NewVote, StoreError, Vote, VoteRepository, VoteValue,
    VoterId, VotingError,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for casting one vote on an agenda item
pub struct CastVoteUseCase {
    agenda_items: Arc<dyn AgendaItemRepository>,
    votes: Arc<dyn VoteRepository>,
    tracker: Arc<SessionWindowTracker>,
    gatekeeper: Arc<EligibilityGatekeeper>,
}

impl CastVoteUseCase {
    pub fn new(
        agenda_items: Arc<dyn AgendaItemRepository>,
        votes: Arc<dyn VoteRepository>,
        tracker: Arc<SessionWindowTracker>,
        gatekeeper: Arc<EligibilityGatekeeper>,
    ) -> Self {
        Self {
            agenda_items,
            votes,
            tracker,
            gatekeeper,
        }
    }

    /// Execute the pipeline; each step short-circuits on failure
    pub async fn execute(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: VoterId,
        value: VoteValue,
    ) -> Result<Vote, VotingError> {
        self.agenda_items
            .find_by_id(agenda_item_id)
            .await?
            .ok_or(VotingError::AgendaItemNotFound(agenda_item_id))?;

        let session = self.tracker.get_for_agenda_item(agenda_item_id).await?;

        // One clock read feeds the window check and everything after it.
        let now = Utc::now();
        if !session.is_open(now) {
            warn!(
                "Rejected vote from {} on agenda item {}: session closed at {}",
                voter_id,
                agenda_item_id,
                session.closes_at()
            );
            return Err(VotingError::SessionClosed(agenda_item_id));
        }

        if self
            .votes
            .find_by_agenda_item_and_voter(agenda_item_id, &voter_id)
            .await?
            .is_some()
        {
            return Err(VotingError::AlreadyVoted {
                agenda_item: agenda_item_id,
                voter: voter_id,
            });
        }

        self.gatekeeper.check(agenda_item_id, &voter_id).await?;

        let draft = NewVote::new(agenda_item_id, voter_id.clone(), value);
        match self.votes.insert(draft).await {
            Ok(vote) => {
                info!(
                    "Vote {} saved for agenda item {}",
                    vote.id(),
                    agenda_item_id
                );
                Ok(vote)
            }
            // A concurrent cast won the race between pre-check and insert.
            Err(StoreError::UniqueViolation(_)) => Err(VotingError::AlreadyVoted {
                agenda_item: agenda_item_id,
                voter: voter_id,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::eligibility_verifier::{ApproveAllVerifier, Verification};
    use crate::use_cases::support::{ScriptedVerifier, TestStore, voter};
    use plenum_domain::EligibilityVerdict;
    use plenum_domain::EligibilityRecordRepository;

    fn pipeline(store: &TestStore, verifier: Arc<dyn crate::EligibilityVerifier>) -> CastVoteUseCase {
        let tracker = Arc::new(SessionWindowTracker::new(
            store.agenda_items.clone(),
            store.sessions.clone(),
        ));
        let gatekeeper = Arc::new(EligibilityGatekeeper::new(
            store.eligibility.clone(),
            verifier,
        ));
        CastVoteUseCase::new(
            store.agenda_items.clone(),
            store.votes.clone(),
            tracker,
            gatekeeper,
        )
    }

    fn approving(store: &TestStore) -> CastVoteUseCase {
        pipeline(store, Arc::new(ApproveAllVerifier))
    }

    #[tokio::test]
    async fn test_vote_accepted_in_open_session() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;

        let vote = approving(&store)
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await
            .unwrap();
        assert_eq!(vote.agenda_item_id(), item.id());
        assert_eq!(vote.value(), VoteValue::Yes);
    }

    #[tokio::test]
    async fn test_unknown_agenda_item() {
        let store = TestStore::new();
        let result = approving(&store)
            .execute(AgendaItemId::from(404), voter("111"), VoteValue::Yes)
            .await;
        assert!(matches!(result, Err(VotingError::AgendaItemNotFound(_))));
    }

    #[tokio::test]
    async fn test_no_session() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        let result = approving(&store)
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await;
        assert!(matches!(result, Err(VotingError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_closed_session_is_bad_request_even_for_first_vote() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_closed_session(item.id()).await;

        let result = approving(&store)
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await;
        assert!(matches!(result, Err(VotingError::SessionClosed(_))));
    }

    #[tokio::test]
    async fn test_second_vote_conflicts() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;
        let pipeline = approving(&store);

        pipeline
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await
            .unwrap();
        let result = pipeline
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await;
        assert!(matches!(result, Err(VotingError::AlreadyVoted { .. })));
    }

    #[tokio::test]
    async fn test_ineligible_voter_rejected_without_second_collaborator_call() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;
        let verifier = Arc::new(ScriptedVerifier::answering(Verification::Invalid));
        let pipeline = pipeline(&store, verifier.clone());

        let first = pipeline
            .execute(item.id(), voter("999"), VoteValue::Yes)
            .await;
        assert!(matches!(first, Err(VotingError::VoterIneligible(_))));

        let second = pipeline
            .execute(item.id(), voter("999"), VoteValue::Yes)
            .await;
        assert!(matches!(second, Err(VotingError::VoterIneligible(_))));
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_collaborator_failure_rejects_without_caching() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;
        let verifier = Arc::new(ScriptedVerifier::failing());
        let pipeline = pipeline(&store, verifier.clone());

        let result = pipeline
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await;
        assert!(matches!(
            result,
            Err(VotingError::EligibilityUnavailable(_))
        ));
        assert!(
            store
                .eligibility
                .find(item.id(), &voter("111"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_able_verdict_cached_across_casts() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;
        let verifier = Arc::new(ScriptedVerifier::answering(Verification::Valid(
            EligibilityVerdict::Able,
        )));
        let pipeline = pipeline(&store, verifier.clone());

        pipeline
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await
            .unwrap();
        // duplicate attempt still consults the cache path, not the collaborator
        let _ = pipeline
            .execute(item.id(), voter("111"), VoteValue::Yes)
            .await;
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_identical_casts_have_exactly_one_winner() {
        let store = TestStore::new();
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;
        let pipeline = Arc::new(approving(&store));

        let mut join_set = tokio::task::JoinSet::new();
        for _ in 0..16 {
            let pipeline = Arc::clone(&pipeline);
            let id = item.id();
            join_set
                .spawn(async move { pipeline.execute(id, voter("111"), VoteValue::Yes).await });
        }

        let mut accepted = 0;
        let mut conflicts = 0;
        while let Some(result) = join_set.join_next().await {
            match result.unwrap() {
                Ok(_) => accepted += 1,
                Err(VotingError::AlreadyVoted { .. }) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(accepted, 1);
        assert_eq!(conflicts, 15);

        let stored = store
            .votes
            .count_by_value(item.id(), VoteValue::Yes)
            .await
            .unwrap();
        assert_eq!(stored, 1);
    }
}
