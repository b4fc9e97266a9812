#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use splice_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the splice library.
    #[display("{}", _0)]
    Core(AppError),

    /// The tracing subscriber could not be installed.
    #[from(ignore)]
    #[display("Logging setup failed: {}", _0)]
    Logging(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
