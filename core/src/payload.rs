#![deny(missing_docs)]

//! # Insertion Payload
//!
//! The block of text spliced between the two anchors. The built-in payload is
//! embedded at compile time from `assets/fluent_random_methods.cs.txt`.

use crate::error::AppResult;
use std::fs;
use std::path::Path;

const BUILTIN: &str = include_str!("../assets/fluent_random_methods.cs.txt");

/// A fixed, ordered block of lines to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    lines: Vec<String>,
}

impl Payload {
    /// The fluent seedable-random builder methods shipped with the tool.
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN)
    }

    /// Builds a payload from raw text.
    ///
    /// A missing final terminator is added so the next document line is not
    /// glued onto the payload's last line.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
        if let Some(last) = lines.last_mut() {
            if !last.ends_with('\n') {
                last.push('\n');
            }
        }
        Self { lines }
    }

    /// Reads a payload from a file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// The payload lines, terminators included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when there is nothing to insert.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
