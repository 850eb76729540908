//! Presentation layer for plenum
//!
//! This crate contains the CLI argument definition and the console output
//! formatting for the voting service.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::{CastAttempt, ConsoleFormatter};
