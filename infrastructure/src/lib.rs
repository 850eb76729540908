//! Infrastructure layer for plenum
//!
//! This crate contains adapters that implement the repository traits of the
//! domain layer and the ports of the application layer, plus configuration
//! file loading.

pub mod config;
pub mod store;
pub mod verifier;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileSessionConfig, FileVerifierConfig,
    VerifierMode,
};
pub use store::memory::{
    MemoryAgendaItemRepository, MemoryEligibilityRecordRepository, MemorySessionRepository,
    MemoryVoteRepository,
};
pub use verifier::build_verifier;
pub use verifier::random::RandomEligibilityVerifier;

#[cfg(feature = "http-verifier")]
pub use verifier::http::HttpEligibilityVerifier;
