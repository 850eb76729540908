//! Domain layer for plenum
//!
//! This crate contains the core business logic, entities, and value objects
//! of the assembly voting service. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agenda item
//!
//! A topic submitted for a vote. An agenda item owns at most one voting
//! session and any number of votes; both are removed together with it.
//!
//! ## Voting session
//!
//! The time window during which votes for one agenda item are accepted.
//! Whether a session is open is a pure function of its stored timestamps
//! against the current clock; no scheduler is involved.
//!
//! ## Vote
//!
//! One YES/NO choice per (agenda item, voter) pair, enforced by a pre-check
//! and by the store's uniqueness constraint.
//!
//! ## Eligibility
//!
//! A cached ABLE/UNABLE verdict per (agenda item, voter) pair, written at
//! most once the first time the pair is evaluated.

pub mod agenda;
pub mod core;
pub mod eligibility;
pub mod session;
pub mod vote;

// Re-export commonly used types
pub use agenda::{
    entities::{AgendaItem, NewAgendaItem},
    repository::AgendaItemRepository,
    value_objects::AgendaItemId,
};
pub use core::error::{ErrorKind, StoreError, VotingError};
pub use eligibility::{
    entities::{EligibilityRecord, EligibilityVerdict, NewEligibilityRecord},
    repository::EligibilityRecordRepository,
};
pub use session::{
    entities::{DEFAULT_DURATION_MINUTES, NewVotingSession, SessionStatus, VotingSession},
    repository::SessionRepository,
    value_objects::SessionId,
};
pub use vote::{
    entities::{NewVote, Vote, VoteValue},
    repository::VoteRepository,
    tally::VoteTally,
    value_objects::{VoteId, VoterId},
};
