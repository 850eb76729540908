//! Eligibility verification port
//!
//! Defines the interface to the external collaborator that decides whether
//! a voter identity may vote at all. The gatekeeper consults it at most
//! once per (agenda item, voter) pair; the collaborator's own reliability
//! concerns (timeouts, retries) stay behind this boundary.

use async_trait::async_trait;
use plenum_domain::{EligibilityVerdict, VoterId};
use thiserror::Error;

/// Errors that can occur while consulting the eligibility collaborator
///
/// None of these are definitive answers, so none of them may be cached.
#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("timeout")]
    Timeout,

    #[error("other error: {0}")]
    Other(String),
}

/// Outcome of a verification call
///
/// Either the presented identity is not a valid one, or it is valid and
/// carries a verdict. Callers treat `Invalid` and `Valid(Unable)` the same
/// way; the distinction only matters to the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Invalid,
    Valid(EligibilityVerdict),
}

impl Verification {
    /// Collapse the outcome into the verdict that gets cached
    pub fn verdict(&self) -> EligibilityVerdict {
        match self {
            Verification::Valid(EligibilityVerdict::Able) => EligibilityVerdict::Able,
            Verification::Invalid | Verification::Valid(EligibilityVerdict::Unable) => {
                EligibilityVerdict::Unable
            }
        }
    }
}

/// Port for the external eligibility collaborator
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait EligibilityVerifier: Send + Sync {
    /// Ask the collaborator about one voter identity
    async fn verify(&self, voter_id: &VoterId) -> Result<Verification, VerifierError>;
}

/// Verifier that declares every voter able to vote
///
/// Useful for tests and for wiring the service without an external
/// collaborator.
pub struct ApproveAllVerifier;

#[async_trait]
impl EligibilityVerifier for ApproveAllVerifier {
    async fn verify(&self, _voter_id: &VoterId) -> Result<Verification, VerifierError> {
        Ok(Verification::Valid(EligibilityVerdict::Able))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_collapse() {
        assert_eq!(Verification::Invalid.verdict(), EligibilityVerdict::Unable);
        assert_eq!(
            Verification::Valid(EligibilityVerdict::Unable).verdict(),
            EligibilityVerdict::Unable
        );
        assert_eq!(
            Verification::Valid(EligibilityVerdict::Able).verdict(),
            EligibilityVerdict::Able
        );
    }

    #[tokio::test]
    async fn test_approve_all() {
        let verifier = ApproveAllVerifier;
        let voter = VoterId::new("111").unwrap();
        let outcome = verifier.verify(&voter).await.unwrap();
        assert_eq!(outcome, Verification::Valid(EligibilityVerdict::Able));
    }
}
