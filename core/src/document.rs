#![deny(missing_docs)]

//! # Document
//!
//! A text file held as an ordered list of lines. Every line keeps its own
//! terminator (`\n` or `\r\n`), so rendering a parsed document gives back the
//! exact input bytes.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// An ordered sequence of lines, each carrying its original terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits `text` into lines, keeping terminators.
    ///
    /// The final line may lack a terminator. Empty text gives an empty document.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Reads the whole file at `path` into memory.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(Self::parse(&text))
    }

    /// Overwrites the file at `path` with the rendered document.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        fs::write(path, self.render())?;
        tracing::debug!(path = %path.display(), lines = self.len(), "saved document");
        Ok(())
    }

    /// Concatenates all lines back into a single string.
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// The lines, terminators included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `lines[..start] ++ replacement ++ lines[end..]`.
    ///
    /// Fails with [`AppError::InvalidRange`] unless `start <= end <= len`.
    pub fn replace_range(
        &self,
        start: usize,
        end: usize,
        replacement: &[String],
    ) -> AppResult<Document> {
        if start > end || end > self.lines.len() {
            return Err(AppError::InvalidRange {
                start,
                end,
                len: self.lines.len(),
            });
        }

        let mut lines = Vec::with_capacity(start + replacement.len() + self.lines.len() - end);
        lines.extend_from_slice(&self.lines[..start]);
        lines.extend_from_slice(replacement);
        lines.extend_from_slice(&self.lines[end..]);
        Ok(Document { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_keeps_terminators() {
        let doc = Document::parse("a\r\nb\nc");
        assert_eq!(doc.lines(), &["a\r\n", "b\n", "c"]);
        assert_eq!(doc.render(), "a\r\nb\nc");
    }

    #[test]
    fn test_parse_empty() {
        let doc = Document::parse("");
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_parse_blank_lines() {
        let doc = Document::parse("\n\nx\n");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.render(), "\n\nx\n");
    }

    #[test]
    fn test_replace_range_middle() {
        let doc = Document::parse("1\n2\n3\n4\n");
        let out = doc
            .replace_range(1, 3, &["x\n".to_string(), "y\n".to_string()])
            .unwrap();
        assert_eq!(out.render(), "1\nx\ny\n4\n");
        // The source document is untouched.
        assert_eq!(doc.render(), "1\n2\n3\n4\n");
    }

    #[test]
    fn test_replace_empty_range_inserts() {
        let doc = Document::parse("1\n2\n");
        let out = doc.replace_range(1, 1, &["x\n".to_string()]).unwrap();
        assert_eq!(out.render(), "1\nx\n2\n");
    }

    #[test]
    fn test_replace_range_rejects_inverted() {
        let doc = Document::parse("1\n2\n3\n");
        let err = doc.replace_range(2, 1, &[]).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRange {
                start: 2,
                end: 1,
                len: 3
            }
        ));
    }

    #[test]
    fn test_replace_range_rejects_past_end() {
        let doc = Document::parse("1\n");
        assert!(doc.replace_range(0, 2, &[]).is_err());
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.cs");
        fs::write(&path, "class A\r\n{\r\n}\r\n").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.len(), 3);

        let out = doc.replace_range(1, 2, &[]).unwrap();
        out.save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "class A\r\n}\r\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(&dir.path().join("nope.cs")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
