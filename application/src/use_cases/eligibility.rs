//! Eligibility gatekeeping use case
//!
//! A write-through cache over the external eligibility collaborator with
//! permanent positive and negative caching per (agenda item, voter) pair.
//! The collaborator is consulted at most once per pair no matter how many
//! cast attempts that pair makes.

use crate::ports::eligibility_verifier::EligibilityVerifier;
use plenum_domain::{
    AgendaItemId, EligibilityRecordRepository, EligibilityVerdict, NewEligibilityRecord,
    VoterId, VotingError,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case deciding whether a voter may vote on an agenda item
pub struct EligibilityGatekeeper {
    records: Arc<dyn EligibilityRecordRepository>,
    verifier: Arc<dyn EligibilityVerifier>,
}

impl EligibilityGatekeeper {
    pub fn new(
        records: Arc<dyn EligibilityRecordRepository>,
        verifier: Arc<dyn EligibilityVerifier>,
    ) -> Self {
        Self { records, verifier }
    }

    /// Check whether `voter_id` may vote on `agenda_item_id`
    ///
    /// A cached verdict answers without contacting the collaborator; a
    /// cached UNABLE is a permanent rejection. On a cache miss the
    /// collaborator is consulted once and its definitive answer is stored.
    /// A collaborator failure is not definitive: nothing is cached and the
    /// attempt fails with `EligibilityUnavailable`.
    pub async fn check(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: &VoterId,
    ) -> Result<(), VotingError> {
        if let Some(record) = self.records.find(agenda_item_id, voter_id).await? {
            debug!(
                "Cached verdict {} for voter {} on agenda item {}",
                record.verdict(),
                voter_id,
                agenda_item_id
            );
            return Self::decide(record.verdict(), voter_id);
        }

        let verification = match self.verifier.verify(voter_id).await {
            Ok(verification) => verification,
            Err(e) => {
                warn!("Eligibility check failed for voter {voter_id}: {e}");
                return Err(VotingError::EligibilityUnavailable(voter_id.clone()));
            }
        };

        let draft = NewEligibilityRecord::new(
            agenda_item_id,
            voter_id.clone(),
            verification.verdict(),
        );
        // Racing first evaluations converge here: the stored record wins,
        // whichever caller wrote it.
        let record = self.records.insert_if_absent(draft).await?;
        info!(
            "Recorded verdict {} for voter {} on agenda item {}",
            record.verdict(),
            voter_id,
            agenda_item_id
        );
        Self::decide(record.verdict(), voter_id)
    }

    fn decide(verdict: EligibilityVerdict, voter_id: &VoterId) -> Result<(), VotingError> {
        match verdict {
            EligibilityVerdict::Able => Ok(()),
            EligibilityVerdict::Unable => Err(VotingError::VoterIneligible(voter_id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::eligibility_verifier::Verification;
    use crate::use_cases::support::{ScriptedVerifier, TestStore, voter};

    fn gatekeeper(store: &TestStore, verifier: Arc<ScriptedVerifier>) -> EligibilityGatekeeper {
        EligibilityGatekeeper::new(store.eligibility.clone(), verifier)
    }

    #[tokio::test]
    async fn test_able_verdict_accepted_and_cached() {
        let store = TestStore::new();
        let verifier = Arc::new(ScriptedVerifier::answering(Verification::Valid(
            EligibilityVerdict::Able,
        )));
        let gatekeeper = gatekeeper(&store, verifier.clone());
        let voter = voter("111");
        let item = AgendaItemId::from(1);

        gatekeeper.check(item, &voter).await.unwrap();
        gatekeeper.check(item, &voter).await.unwrap();
        gatekeeper.check(item, &voter).await.unwrap();

        // one collaborator call, every later check answered from the cache
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_unable_verdict_rejected_permanently() {
        let store = TestStore::new();
        let verifier = Arc::new(ScriptedVerifier::answering(Verification::Valid(
            EligibilityVerdict::Unable,
        )));
        let gatekeeper = gatekeeper(&store, verifier.clone());
        let voter = voter("222");
        let item = AgendaItemId::from(1);

        for _ in 0..3 {
            let result = gatekeeper.check(item, &voter).await;
            assert!(matches!(result, Err(VotingError::VoterIneligible(_))));
        }
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_identity_treated_as_unable() {
        let store = TestStore::new();
        let verifier = Arc::new(ScriptedVerifier::answering(Verification::Invalid));
        let gatekeeper = gatekeeper(&store, verifier.clone());
        let voter = voter("999");
        let item = AgendaItemId::from(1);

        let result = gatekeeper.check(item, &voter).await;
        assert!(matches!(result, Err(VotingError::VoterIneligible(_))));

        let record = store.eligibility.find(item, &voter).await.unwrap().unwrap();
        assert_eq!(record.verdict(), EligibilityVerdict::Unable);
    }

    #[tokio::test]
    async fn test_verdicts_are_scoped_per_agenda_item() {
        let store = TestStore::new();
        let verifier = Arc::new(ScriptedVerifier::answering(Verification::Valid(
            EligibilityVerdict::Able,
        )));
        let gatekeeper = gatekeeper(&store, verifier.clone());
        let voter = voter("111");

        gatekeeper.check(AgendaItemId::from(1), &voter).await.unwrap();
        gatekeeper.check(AgendaItemId::from(2), &voter).await.unwrap();

        // a verdict is per (agenda item, voter), not per voter
        assert_eq!(verifier.calls(), 2);
    }

    #[tokio::test]
    async fn test_collaborator_failure_not_cached() {
        let store = TestStore::new();
        let verifier = Arc::new(ScriptedVerifier::failing());
        let gatekeeper = gatekeeper(&store, verifier.clone());
        let voter = voter("111");
        let item = AgendaItemId::from(1);

        let result = gatekeeper.check(item, &voter).await;
        assert!(matches!(
            result,
            Err(VotingError::EligibilityUnavailable(_))
        ));
        assert!(store.eligibility.find(item, &voter).await.unwrap().is_none());

        // no verdict was cached, so the next attempt consults again
        let _ = gatekeeper.check(item, &voter).await;
        assert_eq!(verifier.calls(), 2);
    }
}
