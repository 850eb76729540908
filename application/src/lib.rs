//! Application layer for plenum
//!
//! This crate contains use cases and port definitions for the voting
//! service. It depends only on the domain layer.
//!
//! The vote-casting decision pipeline lives here: window check, duplicate
//! pre-check, eligibility gatekeeping, and the constraint-backed insert.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::eligibility_verifier::{
    ApproveAllVerifier, EligibilityVerifier, Verification, VerifierError,
};
pub use use_cases::cast_vote::CastVoteUseCase;
pub use use_cases::eligibility::EligibilityGatekeeper;
pub use use_cases::manage_agenda::ManageAgendaUseCase;
pub use use_cases::session_window::SessionWindowTracker;
pub use use_cases::tally::TallyVotesUseCase;
