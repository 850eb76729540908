//! In-memory durable store
//!
//! Repository adapters over locked maps. The uniqueness constraints the
//! pipeline leans on are enforced here atomically: the check and the insert
//! happen under one write lock, so of two racing duplicate writes exactly
//! one succeeds and the other observes `StoreError::UniqueViolation`, the
//! in-memory equivalent of a database unique index rejecting a row.

use async_trait::async_trait;
use chrono::Utc;
use plenum_domain::{
    AgendaItem, AgendaItemId, AgendaItemRepository, EligibilityRecord,
    EligibilityRecordRepository, NewAgendaItem, NewEligibilityRecord, NewVote, NewVotingSession,
    SessionRepository, StoreError, Vote, VoteRepository, VoteValue, VoterId, VotingSession,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

fn read_guard<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read()
        .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
}

fn write_guard<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write()
        .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
}

/// In-memory agenda item table
#[derive(Default)]
pub struct MemoryAgendaItemRepository {
    items: RwLock<BTreeMap<u64, AgendaItem>>,
    next_id: AtomicU64,
}

impl MemoryAgendaItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgendaItemRepository for MemoryAgendaItemRepository {
    async fn insert(&self, item: NewAgendaItem) -> Result<AgendaItem, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = AgendaItem::from_parts(AgendaItemId::from(id), item, Utc::now());
        write_guard(&self.items)?.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: AgendaItemId) -> Result<Option<AgendaItem>, StoreError> {
        Ok(read_guard(&self.items)?.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<AgendaItem>, StoreError> {
        Ok(read_guard(&self.items)?.values().cloned().collect())
    }

    async fn delete(&self, id: AgendaItemId) -> Result<bool, StoreError> {
        Ok(write_guard(&self.items)?.remove(&id.value()).is_some())
    }
}

/// In-memory voting session table, unique per agenda item
///
/// Keying the map by agenda item id *is* the one-session-per-item
/// constraint.
#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<AgendaItemId, VotingSession>>,
    next_id: AtomicU64,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn insert(&self, session: NewVotingSession) -> Result<VotingSession, StoreError> {
        let mut sessions = write_guard(&self.sessions)?;
        let agenda_item_id = session.agenda_item_id();
        if sessions.contains_key(&agenda_item_id) {
            return Err(StoreError::UniqueViolation(format!(
                "session already exists for agenda item {agenda_item_id}"
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
        Ok(read_guard(&self.sessions)?.get(&agenda_item_id).cloned())
    }

    async fn delete_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<(), StoreError> {
        write_guard(&self.sessions)?.remove(&agenda_item_id);
        Ok(())
    }
}

/// In-memory vote table with the (agenda item, voter) unique constraint
#[derive(Default)]
pub struct MemoryVoteRepository {
    votes: RwLock<HashMap<(AgendaItemId, VoterId), Vote>>,
    next_id: AtomicU64,
}

impl MemoryVoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoteRepository for MemoryVoteRepository {
    async fn insert(&self, vote: NewVote) -> Result<Vote, StoreError> {
        let mut votes = write_guard(&self.votes)?;
        let key = (vote.agenda_item_id(), vote.voter_id().clone());
        if votes.contains_key(&key) {
            return Err(StoreError::UniqueViolation(format!(
                "voter {} already voted on agenda item {}",
                key.1, key.0
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
        Ok(read_guard(&self.votes)?.get(&key).cloned())
    }

    async fn count_by_value(
        &self,
        agenda_item_id: AgendaItemId,
        value: VoteValue,
    ) -> Result<u64, StoreError> {
        let votes = read_guard(&self.votes)?;
        Ok(votes
            .values()
            .filter(|v| v.agenda_item_id() == agenda_item_id && v.value() == value)
            .count() as u64)
    }

    async fn delete_by_agenda_item(
        &self,
        agenda_item_id: AgendaItemId,
    ) -> Result<(), StoreError> {
        write_guard(&self.votes)?.retain(|(item, _), _| *item != agenda_item_id);
        Ok(())
    }
}

/// In-memory eligibility verdict cache, append-only per pair
#[derive(Default)]
pub struct MemoryEligibilityRecordRepository {
    records: RwLock<HashMap<(AgendaItemId, VoterId), EligibilityRecord>>,
}

impl MemoryEligibilityRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EligibilityRecordRepository for MemoryEligibilityRecordRepository {
    async fn find(
        &self,
        agenda_item_id: AgendaItemId,
        voter_id: &VoterId,
    ) -> Result<Option<EligibilityRecord>, StoreError> {
        let key = (agenda_item_id, voter_id.clone());
        Ok(read_guard(&self.records)?.get(&key).cloned())
    }

    async fn insert_if_absent(
        &self,
        record: NewEligibilityRecord,
    ) -> Result<EligibilityRecord, StoreError> {
        let mut records = write_guard(&self.records)?;
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
        write_guard(&self.records)?.retain(|(item, _), _| *item != agenda_item_id);
        Ok(())
    }
}
