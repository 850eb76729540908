//! Vote identifiers and the voter identity value object

use crate::core::error::VotingError;
use serde::{Deserialize, Serialize};

/// Maximum length of a voter identifier, in characters
pub const MAX_VOTER_ID_LEN: usize = 20;

/// Identity of a persisted vote (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VoteId(u64);

impl VoteId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VoteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for VoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque voter identity presented with a vote (Value Object)
///
/// The service does not authenticate it; the only rules are that it is
/// non-blank and at most [`MAX_VOTER_ID_LEN`] characters. Uniqueness is
/// scoped per agenda item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    /// Validate and create a voter identifier
    pub fn new(id: impl Into<String>) -> Result<Self, VotingError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VotingError::InvalidVoterId(
                "voter identifier must not be blank".into(),
            ));
        }
        if id.chars().count() > MAX_VOTER_ID_LEN {
            return Err(VotingError::InvalidVoterId(format!(
                "voter identifier exceeds {MAX_VOTER_ID_LEN} characters"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
