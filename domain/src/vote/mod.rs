//! Votes: one YES/NO choice per (agenda item, voter) pair

pub mod entities;
pub mod repository;
pub mod tally;
pub mod value_objects;

pub use entities::{NewVote, Vote, VoteValue};
pub use repository::VoteRepository;
pub use tally::VoteTally;
pub use value_objects::{VoteId, VoterId};
