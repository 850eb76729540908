//! Agenda item repository trait

use crate::agenda::entities::{AgendaItem, NewAgendaItem};
use crate::agenda::value_objects::AgendaItemId;
use crate::core::error::StoreError;
use async_trait::async_trait;

/// Repository trait for agenda items
///
/// This is a domain-level abstraction over the durable store.
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait AgendaItemRepository: Send + Sync {
    /// Persist a new agenda item, assigning identity and creation timestamp
    async fn insert(&self, item: NewAgendaItem) -> Result<AgendaItem, StoreError>;

    /// Point lookup by identity
    async fn find_by_id(&self, id: AgendaItemId) -> Result<Option<AgendaItem>, StoreError>;

    /// All agenda items in identity order
    async fn list(&self) -> Result<Vec<AgendaItem>, StoreError>;

    /// Remove an agenda item. Returns whether it existed.
    async fn delete(&self, id: AgendaItemId) -> Result<bool, StoreError>;
}
