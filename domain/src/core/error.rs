//! Domain error types

use crate::agenda::value_objects::AgendaItemId;
use crate::vote::value_objects::VoterId;
use thiserror::Error;

/// Transport-agnostic classification of a domain error.
///
/// Adapter layers map these to whatever their transport uses for status
/// signaling; the core only distinguishes the four kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Conflict,
    Internal,
}

/// Errors surfaced by durable store adapters.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The store could not serve the request at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Domain-level errors for the voting service
#[derive(Error, Debug)]
pub enum VotingError {
    #[error("agenda item {0} not found")]
    AgendaItemNotFound(AgendaItemId),

    #[error("no voting session found for agenda item {0}")]
    SessionNotFound(AgendaItemId),

    #[error("a voting session already exists for agenda item {0}")]
    SessionAlreadyOpened(AgendaItemId),

    #[error("voting session closed for agenda item {0}")]
    SessionClosed(AgendaItemId),

    #[error("voter {voter} already voted on agenda item {agenda_item}")]
    AlreadyVoted {
        agenda_item: AgendaItemId,
        voter: VoterId,
    },

    #[error("voter {0} may not vote")]
    VoterIneligible(VoterId),

    #[error("eligibility could not be determined for voter {0}")]
    EligibilityUnavailable(VoterId),

    #[error("invalid agenda item: {0}")]
    InvalidAgendaItem(String),

    #[error("invalid voter identifier: {0}")]
    InvalidVoterId(String),

    #[error("session duration must be a positive number of minutes")]
    InvalidDuration,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl VotingError {
    /// Classify this error for the adapter layer.
    ///
    /// `VoterIneligible` reports `NotFound`: an ineligible voter is
    /// answered the same way as a missing resource, and callers depend
    /// on that.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VotingError::AgendaItemNotFound(_)
            | VotingError::SessionNotFound(_)
            | VotingError::VoterIneligible(_) => ErrorKind::NotFound,
            VotingError::SessionAlreadyOpened(_) | VotingError::AlreadyVoted { .. } => {
                ErrorKind::Conflict
            }
            VotingError::SessionClosed(_)
            | VotingError::InvalidAgendaItem(_)
            | VotingError::InvalidVoterId(_)
            | VotingError::InvalidDuration => ErrorKind::BadRequest,
            VotingError::EligibilityUnavailable(_) | VotingError::Store(_) => ErrorKind::Internal,
        }
    }

    /// Check if this error represents a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter(id: &str) -> VoterId {
        VoterId::new(id).unwrap()
    }

    #[test]
    fn test_not_found_kinds() {
        assert_eq!(
            VotingError::AgendaItemNotFound(AgendaItemId::from(1)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            VotingError::SessionNotFound(AgendaItemId::from(1)).kind(),
            ErrorKind::NotFound
        );
        // Ineligible voters answer as NotFound
        assert_eq!(
            VotingError::VoterIneligible(voter("999")).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_conflict_kinds() {
        let already_voted = VotingError::AlreadyVoted {
            agenda_item: AgendaItemId::from(1),
            voter: voter("111"),
        };
        assert_eq!(already_voted.kind(), ErrorKind::Conflict);
        assert!(already_voted.is_conflict());
        assert!(VotingError::SessionAlreadyOpened(AgendaItemId::from(1)).is_conflict());
    }

    #[test]
    fn test_bad_request_kinds() {
        assert_eq!(
            VotingError::SessionClosed(AgendaItemId::from(1)).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(VotingError::InvalidDuration.kind(), ErrorKind::BadRequest);
        assert_eq!(
            VotingError::InvalidVoterId("blank".into()).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_internal_kinds() {
        assert_eq!(
            VotingError::EligibilityUnavailable(voter("111")).kind(),
            ErrorKind::Internal
        );
        let store = VotingError::from(StoreError::Unavailable("down".into()));
        assert_eq!(store.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_display_messages() {
        let err = VotingError::SessionClosed(AgendaItemId::from(7));
        assert_eq!(err.to_string(), "voting session closed for agenda item 7");
        let err = VotingError::VoterIneligible(voter("999"));
        assert_eq!(err.to_string(), "voter 999 may not vote");
    }
}
