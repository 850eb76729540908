//! Voting sessions: the time window during which votes are accepted

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{DEFAULT_DURATION_MINUTES, NewVotingSession, SessionStatus, VotingSession};
pub use repository::SessionRepository;
pub use value_objects::SessionId;
