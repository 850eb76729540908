//! In-memory test doubles for use-case tests
//!
//! These stand in for the durable store and the eligibility collaborator,
//! with the same constraint semantics the real adapters provide: vote and
//! session uniqueness are checked and inserted under one lock, and the
//! eligibility cache is insert-if-absent.

use crate::ports::eligibility_verifier::{EligibilityVerifier, Verification, VerifierError};
use async_trait::async_trait;
use chrono::Utc;
use plenum_domain::{
    AgendaItem, AgendaItemId, AgendaItemRepository, EligibilityRecord,
    EligibilityRecordRepository, NewAgendaItem, NewEligibilityRecord, NewVote, NewVotingSession,
    SessionRepository, StoreError, VoteRepository, VoteValue, VoterId, Vote, VotingSession,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeAgendaItemRepository {
    items: Mutex<BTreeMap<u64, AgendaItem>>,
    next_id: AtomicU64,
}

#[async_trait]
impl AgendaItemRepository for FakeAgendaItemRepository {
    async fn insert(&self, item: NewAgendaItem) -> Result<AgendaItem, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = AgendaItem::from_parts(AgendaItemId::from(id), item, Utc::now());
        self.items.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: AgendaItemId) -> Result<Option<AgendaItem>, StoreError> {
        Ok(self.items.lock().unwrap().get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<AgendaItem>, StoreError> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: AgendaItemId) -> Result<bool, StoreError> {
        Ok(self.items.lock().unwrap().remove(&id.value()).is_some())
    }
}

#[derive(Default)]
pub struct FakeSessionRepository {
    sessions: Mutex<HashMap<AgendaItemId, VotingSession>>,
    next_id: AtomicU64,
}

#[async_trait]
impl SessionRepository for FakeSessionRepository {
    async fn insert(&self, session: NewVotingSession) -> Result<VotingSession, StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        let agenda_item_id = session.agenda_item_id();
        if sessions.contains_key(&agenda_item_id) {
            return Err(StoreError::UniqueViolation(format!(
                "session exists for agenda item {agenda_item_id}"
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = VotingSession::from_parts(id.into(), session);
        sessions.insert(agenda_item_id, stored.clone());
        Ok(stored)
    }

    async fn find_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<Option<VotingSession>, StoreError> {
        Ok(self.sessions.lock().unwrap().get(&agenda_item_id).cloned())
    }

    async fn delete_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<(), StoreError> {
        self.sessions.lock().unwrap().remove(&agenda_item_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeVoteRepository {
    votes: Mutex<HashMap<(AgendaItemId, VoterId), Vote>>,
    next_id: AtomicU64,
}

#[async_trait]
impl VoteRepository for FakeVoteRepository {
    async fn insert(&self, vote: NewVote) -> Result<Vote, StoreError> {
        let mut votes = self.votes.lock().unwrap();
        let key = (vote.agenda_item_id(), vote.voter_id().clone());
        if votes.contains_key(&key) {
            return Err(StoreError::UniqueViolation(format!(
                "vote exists for ({}, {})",
                key.0, key.1
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Vote::from_parts(id.into(), vote, Utc::now());
        votes.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_agenda_item_and_voter(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: &VoterId,
    ) -> Result<Option<Vote>, StoreError> {
        let key = (agenda_item_id, voter_id.clone());
        Ok(self.votes.lock().unwrap().get(&key).cloned())
    }

    async fn count_by_value(
        &self,
        agenda_item_id: AgendaItemId,
        value: VoteValue,
    ) -> Result<u64, StoreError> {
        let votes = self.votes.lock().unwrap();
        Ok(votes
            .values()
            .filter(|v| v.agenda_item_id() == agenda_item_id && v.value() == value)
            .count() as u64)
    }

    async fn delete_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<(), StoreError> {
        self.votes
            .lock()
            .unwrap()
            .retain(|(item, _), _| *item != agenda_item_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeEligibilityRepository {
    records: Mutex<HashMap<(AgendaItemId, VoterId), EligibilityRecord>>,
}

#[async_trait]
impl EligibilityRecordRepository for FakeEligibilityRepository {
    async fn find(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: &VoterId,
    ) -> Result<Option<EligibilityRecord>, StoreError> {
        let key = (agenda_item_id, voter_id.clone());
        Ok(self.records.lock().unwrap().get(&key).cloned())
    }

    async fn insert_if_absent(
        &self,
        record: NewEligibilityRecord,
    ) -> Result<EligibilityRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        let key = (record.agenda_item_id(), record.voter_id().clone());
        let stored = records
            .entry(key)
            .or_insert_with(|| EligibilityRecord::from_parts(record, Utc::now()));
        Ok(stored.clone())
    }

    async fn delete_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .retain(|(item, _), _| *item != agenda_item_id);
        Ok(())
    }
}

/// Scripted eligibility collaborator that counts how often it was consulted
pub struct ScriptedVerifier {
    outcome: Option<Verification>,
    calls: AtomicUsize,
}

impl ScriptedVerifier {
    pub fn answering(outcome: Verification) -> Self {
        Self {
            outcome: Some(outcome),
            calls: AtomicUsize::new(0),
        }
    }

    /// A collaborator that fails every call (timeout)
    pub fn failing() -> Self {
        Self {
            outcome: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EligibilityVerifier for ScriptedVerifier {
    async fn verify(&self, _voter_id: &VoterId) -> Result<Verification, VerifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Some(outcome) => Ok(outcome),
            None => Err(VerifierError::Timeout),
        }
    }
}

/// Bundle of fake repositories shared by use-case tests
pub struct TestStore {
    pub agenda_items: Arc<FakeAgendaItemRepository>,
    pub sessions: Arc<FakeSessionRepository>,
    pub votes: Arc<FakeVoteRepository>,
    pub eligibility: Arc<FakeEligibilityRepository>,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            agenda_items: Arc::new(FakeAgendaItemRepository::default()),
            sessions: Arc::new(FakeSessionRepository::default()),
            votes: Arc::new(FakeVoteRepository::default()),
            eligibility: Arc::new(FakeEligibilityRepository::default()),
        }
    }

    /// Insert an agenda item directly into the store
    pub async fn seed_item(&self, title: &str) -> AgendaItem {
        let draft = NewAgendaItem::new(title, None).unwrap();
        self.agenda_items.insert(draft).await.unwrap()
    }

    /// Insert a session whose window already elapsed
    pub async fn seed_closed_session(&self, agenda_item_id: AgendaItemId) -> VotingSession {
        let opens_at = Utc::now() - chrono::Duration::minutes(10);
        let draft = NewVotingSession::with_duration(agenda_item_id, opens_at, 1).unwrap();
        self.sessions.insert(draft).await.unwrap()
    }

    /// Insert a session open for the next hour
    pub async fn seed_open_session(&self, agenda_item_id: AgendaItemId) -> VotingSession {
        let draft = NewVotingSession::with_duration(agenda_item_id, Utc::now(), 60).unwrap();
        self.sessions.insert(draft).await.unwrap()
    }
}

pub fn voter(id: &str) -> VoterId {
    VoterId::new(id).unwrap()
}
