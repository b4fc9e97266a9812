#![deny(missing_docs)]

//! # Anchor Search
//!
//! Locates the two boundaries of the region to splice by literal substring
//! search over a document's lines.
//!
//! - **start**: the line right after the closing brace of the method whose
//!   signature is `start_signature`.
//! - **end**: the doc-comment line that opens the block preceding the method
//!   whose signature is `end_signature`.

use std::fmt::Display;

/// Which of the two boundaries a search refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The boundary after the start method's closing brace.
    Start,
    /// The doc-comment boundary before the end method.
    End,
}

impl Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::Start => write!(f, "start"),
            Anchor::End => write!(f, "end"),
        }
    }
}

/// The literal markers driving both searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSet {
    /// Substring identifying the method the splice starts after.
    pub start_signature: String,
    /// Substring identifying the method the splice ends before.
    pub end_signature: String,
    /// Substring identifying the doc-comment line above the end method.
    pub doc_marker: String,
}

/// Both boundaries as resolved against one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    /// First line index to drop.
    pub start: Option<usize>,
    /// First line index to keep after the dropped region.
    pub end: Option<usize>,
}

impl Boundaries {
    /// The first unresolved anchor, if any.
    pub fn missing(&self) -> Option<Anchor> {
        match (self.start, self.end) {
            (None, _) => Some(Anchor::Start),
            (_, None) => Some(Anchor::End),
            _ => None,
        }
    }
}

impl AnchorSet {
    /// Runs both searches independently.
    pub fn resolve<S: AsRef<str>>(&self, lines: &[S]) -> Boundaries {
        Boundaries {
            start: find_start_boundary(lines, &self.start_signature),
            end: find_end_boundary(lines, &self.end_signature, &self.doc_marker),
        }
    }
}

/// Index of the line after the first closing brace that follows `signature`.
///
/// A closing brace is a line whose trimmed content is exactly `}`.
pub fn find_start_boundary<S: AsRef<str>>(lines: &[S], signature: &str) -> Option<usize> {
    let sig_idx = lines.iter().position(|l| l.as_ref().contains(signature))?;
    lines[sig_idx..]
        .iter()
        .position(|l| l.as_ref().trim() == "}")
        .map(|offset| sig_idx + offset + 1)
}

/// Index of the nearest line at or above `signature` that contains `doc_marker`.
///
/// The scan stops before line 0: a marker on the first line never counts.
pub fn find_end_boundary<S: AsRef<str>>(
    lines: &[S],
    signature: &str,
    doc_marker: &str,
) -> Option<usize> {
    let sig_idx = lines.iter().position(|l| l.as_ref().contains(signature))?;
    lines[..=sig_idx]
        .iter()
        .rposition(|l| l.as_ref().contains(doc_marker))
        .filter(|&idx| idx > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &[
        "A\n",
        "public Foo Bar(int value)\n",
        "{\n",
        "   x();\n",
        "}\n",
        "C\n",
        "/// <summary>\n",
        "public Foo Baz(double v)\n",
        "D\n",
    ];

    #[test]
    fn test_start_after_closing_brace() {
        assert_eq!(find_start_boundary(LINES, "Bar(int value)"), Some(5));
    }

    #[test]
    fn test_start_ignores_nested_brace_text() {
        let lines = ["void M()\n", "{\n", "  if (x) { y(); }\n", "    }  \n", "tail\n"];
        // `  if (x) { y(); }` trims to more than a brace; `    }  ` trims to exactly one.
        assert_eq!(find_start_boundary(&lines, "void M()"), Some(4));
    }

    #[test]
    fn test_start_missing_signature() {
        assert_eq!(find_start_boundary(LINES, "Qux("), None);
    }

    #[test]
    fn test_start_without_closing_brace() {
        let lines = ["void M()\n", "{\n", "  x();\n"];
        assert_eq!(find_start_boundary(&lines, "void M()"), None);
    }

    #[test]
    fn test_start_uses_first_signature_match() {
        let lines = ["M(1)\n", "}\n", "M(1)\n", "}\n"];
        assert_eq!(find_start_boundary(&lines, "M(1)"), Some(2));
    }

    #[test]
    fn test_end_at_doc_marker() {
        assert_eq!(
            find_end_boundary(LINES, "Baz(double v)", "/// <summary>"),
            Some(6)
        );
    }

    #[test]
    fn test_end_picks_nearest_marker() {
        let lines = [
            "/// <summary>\n",
            "/// first\n",
            "/// </summary>\n",
            "/// <summary>\n",
            "/// second\n",
            "/// </summary>\n",
            "void Target()\n",
        ];
        assert_eq!(
            find_end_boundary(&lines, "void Target()", "/// <summary>"),
            Some(3)
        );
    }

    #[test]
    fn test_end_ignores_marker_on_first_line() {
        let lines = ["/// <summary>\n", "void Target()\n"];
        assert_eq!(find_end_boundary(&lines, "void Target()", "/// <summary>"), None);
    }

    #[test]
    fn test_end_marker_on_second_line() {
        let lines = ["x\n", "/// <summary>\n", "void Target()\n"];
        assert_eq!(
            find_end_boundary(&lines, "void Target()", "/// <summary>"),
            Some(1)
        );
    }

    #[test]
    fn test_end_without_marker() {
        let lines = ["x\n", "void Target()\n"];
        assert_eq!(find_end_boundary(&lines, "void Target()", "/// <summary>"), None);
    }

    #[test]
    fn test_end_ignores_markers_below_signature() {
        let lines = ["void Target()\n", "/// <summary>\n"];
        assert_eq!(find_end_boundary(&lines, "void Target()", "/// <summary>"), None);
    }

    #[test]
    fn test_resolve_reports_missing_anchor() {
        let anchors = AnchorSet {
            start_signature: "Nope(".into(),
            end_signature: "Baz(double v)".into(),
            doc_marker: "/// <summary>".into(),
        };
        let bounds = anchors.resolve(LINES);
        assert_eq!(bounds.start, None);
        assert_eq!(bounds.end, Some(6));
        assert_eq!(bounds.missing(), Some(Anchor::Start));
    }
}
