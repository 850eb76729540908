//! Configuration file schema

use plenum_domain::DEFAULT_DURATION_MINUTES;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating a loaded configuration
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("session.default_duration_minutes must be at least 1")]
    InvalidDuration,

    #[error("verifier.{0} must be between 0 and 100")]
    InvalidPercent(&'static str),

    #[error("verifier.base_url is required when verifier.mode is \"http\"")]
    MissingBaseUrl,

    #[error("verifier.mode \"http\" requires the http-verifier feature")]
    HttpVerifierDisabled,
}

/// Which eligibility verifier adapter to wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerifierMode {
    /// Fake collaborator answering from a random draw
    Random,
    /// Every voter is able to vote
    ApproveAll,
    /// Remote verification service over HTTP
    Http,
}

/// Root configuration file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub session: FileSessionConfig,
    pub verifier: FileVerifierConfig,
}

impl FileConfig {
    /// Check cross-field rules that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.session.default_duration_minutes == 0 {
            return Err(ConfigValidationError::InvalidDuration);
        }
        if self.verifier.invalid_percent > 100 {
            return Err(ConfigValidationError::InvalidPercent("invalid_percent"));
        }
        if self.verifier.unable_percent > 100 {
            return Err(ConfigValidationError::InvalidPercent("unable_percent"));
        }
        if self.verifier.mode == VerifierMode::Http && self.verifier.base_url.is_none() {
            return Err(ConfigValidationError::MissingBaseUrl);
        }
        Ok(())
    }
}

/// `[session]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Session duration applied when the caller does not supply one
    pub default_duration_minutes: u32,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

/// `[verifier]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVerifierConfig {
    pub mode: VerifierMode,
    /// Share of identities the random verifier reports invalid
    pub invalid_percent: u8,
    /// Share of valid identities the random verifier marks UNABLE
    pub unable_percent: u8,
    /// Remote service base URL (http mode only)
    pub base_url: Option<String>,
}

impl Default for FileVerifierConfig {
    fn default() -> Self {
        Self {
            mode: VerifierMode::Random,
            invalid_percent: 20,
            unable_percent: 50,
            base_url: None,
        }
    }
}
