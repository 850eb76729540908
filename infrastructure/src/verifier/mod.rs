//! Eligibility verifier adapters

pub mod random;

#[cfg(feature = "http-verifier")]
pub mod http;

use crate::config::{ConfigValidationError, FileVerifierConfig, VerifierMode};
use plenum_application::{ApproveAllVerifier, EligibilityVerifier};
use std::sync::Arc;

/// Build the eligibility verifier selected by the configuration
pub fn build_verifier(
    config: &FileVerifierConfig,
) -> Result<Arc<dyn EligibilityVerifier>, ConfigValidationError> {
    match config.mode {
        VerifierMode::ApproveAll => Ok(Arc::new(ApproveAllVerifier)),
        VerifierMode::Random => Ok(Arc::new(random::RandomEligibilityVerifier::new(
            config.invalid_percent,
            config.unable_percent,
        ))),
        #[cfg(feature = "http-verifier")]
        VerifierMode::Http => {
            let base_url = config
                .base_url
                .clone()
                .ok_or(ConfigValidationError::MissingBaseUrl)?;
            Ok(Arc::new(http::HttpEligibilityVerifier::new(base_url)))
        }
        #[cfg(not(feature = "http-verifier"))]
        VerifierMode::Http => Err(ConfigValidationError::HttpVerifierDisabled),
    }
}
