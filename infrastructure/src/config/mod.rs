//! Configuration loading and validation

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileSessionConfig, FileVerifierConfig, VerifierMode,
};
pub use loader::ConfigLoader;
