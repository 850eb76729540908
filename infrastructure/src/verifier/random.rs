//! Fake eligibility collaborator
//!
//! Stands in for the external verification service during local runs and
//! demonstrations: a configurable share of identities come back invalid,
//! the rest draw an ABLE/UNABLE verdict.

use async_trait::async_trait;
use plenum_application::{EligibilityVerifier, Verification, VerifierError};
use plenum_domain::{EligibilityVerdict, VoterId};
use rand::Rng;
use tracing::debug;

/// Verifier answering from a random draw instead of an external service
pub struct RandomEligibilityVerifier {
    invalid_percent: u8,
    unable_percent: u8,
}

impl RandomEligibilityVerifier {
    /// `invalid_percent` of identities are reported invalid; of the valid
    /// ones, `unable_percent` draw an UNABLE verdict.
    pub fn new(invalid_percent: u8, unable_percent: u8) -> Self {
        Self {
            invalid_percent,
            unable_percent,
        }
    }
}

impl Default for RandomEligibilityVerifier {
    fn default() -> Self {
        Self::new(20, 50)
    }
}

#[async_trait]
impl EligibilityVerifier for RandomEligibilityVerifier {
    async fn verify(&self, voter_id: &VoterId) -> Result<Verification, VerifierError> {
        let mut rng = rand::rng();
        if rng.random_range(0..100u32) < u32::from(self.invalid_percent) {
            debug!("Voter {voter_id} reported invalid by fake check");
            return Ok(Verification::Invalid);
        }
        let verdict = if rng.random_range(0..100u32) < u32::from(self.unable_percent) {
            EligibilityVerdict::Unable
        } else {
            EligibilityVerdict::Able
        };
        debug!("Voter {voter_id} fake verdict {verdict}");
        Ok(Verification::Valid(verdict))
    }
}
