//! Agenda item entities

use crate::agenda::value_objects::AgendaItemId;
use crate::core::error::VotingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of an agenda item title, in characters
pub const MAX_TITLE_LEN: usize = 120;

/// Maximum length of an agenda item description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A validated agenda item awaiting persistence
///
/// Identity and creation timestamp are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgendaItem {
    title: String,
    description: Option<String>,
}

impl NewAgendaItem {
    /// Validate and create a draft agenda item
    ///
    /// The title is required, must not be blank, and is capped at
    /// [`MAX_TITLE_LEN`] characters; the optional description is capped at
    /// [`MAX_DESCRIPTION_LEN`] characters.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, VotingError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(VotingError::InvalidAgendaItem(
                "title must not be blank".into(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(VotingError::InvalidAgendaItem(format!(
                "title exceeds {MAX_TITLE_LEN} characters"
            )));
        }
        if let Some(description) = &description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(VotingError::InvalidAgendaItem(format!(
                    "description exceeds {MAX_DESCRIPTION_LEN} characters"
                )));
            }
        }
        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A persisted agenda item (Entity)
///
/// Immutable after creation; removing it cascades to its session, votes,
/// and eligibility records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    id: AgendaItemId,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl AgendaItem {
    /// Materialize a persisted agenda item. Intended for store adapters.
    pub fn from_parts(
        id: AgendaItemId,
        item: NewAgendaItem,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: item.title,
            description: item.description,
            created_at,
        }
    }

    pub fn id(&self) -> AgendaItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
