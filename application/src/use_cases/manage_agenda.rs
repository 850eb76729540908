//! Agenda item management use case
//!
//! Thin orchestration over the store: create, list, get, delete. Deleting
//! an agenda item removes everything it owns (votes, session, and cached
//! eligibility records) before the item itself.

use plenum_domain::{
    AgendaItem, AgendaItemId, AgendaItemRepository, EligibilityRecordRepository, NewAgendaItem,
    SessionRepository, VoteRepository, VotingError,
};
use std::sync::Arc;
use tracing::info;

/// Use case for the agenda item lifecycle
pub struct ManageAgendaUseCase {
    agenda_items: Arc<dyn AgendaItemRepository>,
    sessions: Arc<dyn SessionRepository>,
    votes: Arc<dyn VoteRepository>,
    eligibility: Arc<dyn EligibilityRecordRepository>,
}

impl ManageAgendaUseCase {
    pub fn new(
        agenda_items: Arc<dyn AgendaItemRepository>,
        sessions: Arc<dyn SessionRepository>,
        votes: Arc<dyn VoteRepository>,
        eligibility: Arc<dyn EligibilityRecordRepository>,
    ) -> Self {
        Self {
            agenda_items,
            sessions,
            votes,
            eligibility,
        }
    }

    /// Register a new agenda item
    pub async fn create(&self, item: NewAgendaItem) -> Result<AgendaItem, VotingError> {
        let item = self.agenda_items.insert(item).await?;
        info!("Created agenda item {}", item.id());
        Ok(item)
    }

    /// All agenda items in creation order
    pub async fn list(&self) -> Result<Vec<AgendaItem>, VotingError> {
        Ok(self.agenda_items.list().await?)
    }

    /// Resolve one agenda item
    pub async fn get(&self, id: AgendaItemId) -> Result<AgendaItem, VotingError> {
        self.agenda_items
            .find_by_id(id)
            .await?
            .ok_or(VotingError::AgendaItemNotFound(id))
    }

    /// Remove an agenda item and everything it owns
    pub async fn delete(&self, id: AgendaItemId) -> Result<(), VotingError> {
        let item = self.get(id).await?;
        self.votes.delete_by_agenda_item(item.id()).await?;
        self.sessions.delete_by_agenda_item(item.id()).await?;
        self.eligibility.delete_by_agenda_item(item.id()).await?;
        self.agenda_items.delete(item.id()).await?;
        info!("Deleted agenda item {}", item.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::support::{TestStore, voter};
    use plenum_domain::{
        EligibilityVerdict, NewEligibilityRecord, NewVote, VoteValue,
    };

    fn use_case(store: &TestStore) -> ManageAgendaUseCase {
        ManageAgendaUseCase::new(
            store.agenda_items.clone(),
            store.sessions.clone(),
            store.votes.clone(),
            store.eligibility.clone(),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = TestStore::new();
        let use_case = use_case(&store);

        let draft = NewAgendaItem::new("Pauta A", Some("Budget".into())).unwrap();
        let created = use_case.create(draft).await.unwrap();
        let fetched = use_case.get(created.id()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_not_found() {
        let store = TestStore::new();
        let result = use_case(&store).get(AgendaItemId::from(1)).await;
        assert!(matches!(result, Err(VotingError::AgendaItemNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let store = TestStore::new();
        let use_case = use_case(&store);
        let a = use_case
            .create(NewAgendaItem::new("Pauta A", None).unwrap())
            .await
            .unwrap();
        let b = use_case
            .create(NewAgendaItem::new("Pauta B", None).unwrap())
            .await
            .unwrap();

        let items = use_case.list().await.unwrap();
        assert_eq!(items, vec![a, b]);
    }

    #[tokio::test]
    async fn test_delete_missing_not_found() {
        let store = TestStore::new();
        let result = use_case(&store).delete(AgendaItemId::from(9)).await;
        assert!(matches!(result, Err(VotingError::AgendaItemNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_cascades_owned_state() {
        let store = TestStore::new();
        let use_case = use_case(&store);
        let item = store.seed_item("Pauta A").await;
        store.seed_open_session(item.id()).await;
        store
            .votes
            .insert(NewVote::new(item.id(), voter("111"), VoteValue::Yes))
            .await
            .unwrap();
        store
            .eligibility
            .insert_if_absent(NewEligibilityRecord::new(
                item.id(),
                voter("111"),
                EligibilityVerdict::Able,
            ))
            .await
            .unwrap();

        use_case.delete(item.id()).await.unwrap();

        assert!(use_case.get(item.id()).await.is_err());
        assert!(
            store
                .sessions
                .find_by_agenda_item(item.id())
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(
            store
                .votes
                .count_by_value(item.id(), VoteValue::Yes)
                .await
                .unwrap(),
            0
        );
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
    async fn test_delete_leaves_other_items_alone() {
        let store = TestStore::new();
        let use_case = use_case(&store);
        let keep = store.seed_item("Keep").await;
        let doomed = store.seed_item("Drop").await;
        store.seed_open_session(keep.id()).await;
        store
            .votes
            .insert(NewVote::new(keep.id(), voter("111"), VoteValue::No))
            .await
            .unwrap();

        use_case.delete(doomed.id()).await.unwrap();

        assert!(use_case.get(keep.id()).await.is_ok());
        assert_eq!(
            store
                .votes
                .count_by_value(keep.id(), VoteValue::No)
                .await
                .unwrap(),
            1
        );
    }
}
