#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! An unresolved anchor is not an error: it is reported as
//! [`SpliceOutcome::Aborted`](crate::splice::SpliceOutcome::Aborted).

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A recipe file could not be parsed.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// A line range that does not fit the document.
    #[from(ignore)]
    #[display("Invalid range {start}..{end} for a document of {len} lines")]
    InvalidRange {
        /// First line to drop.
        start: usize,
        /// First line to keep after the dropped region.
        end: usize,
        /// Number of lines in the document.
        len: usize,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
