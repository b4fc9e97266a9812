#![deny(missing_docs)]

//! # Splicing
//!
//! Replaces the region between the two anchors with a payload.
//!
//! The operation is all-or-nothing: the document (or file) is only rewritten
//! when both anchors resolve and are in order.

use crate::anchor::{Anchor, AnchorSet};
use crate::document::Document;
use crate::error::AppResult;
use crate::payload::Payload;
use crate::recipe::PatchRecipe;
use std::path::Path;

/// Result of a successful splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceReport {
    /// The rewritten document.
    pub document: Document,
    /// First dropped line index in the original document.
    pub start: usize,
    /// First kept line index after the dropped region, in the original document.
    pub end: usize,
    /// Lines dropped from the original.
    pub removed: usize,
    /// Lines taken from the payload.
    pub inserted: usize,
}

/// Final state of a splice attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// Both anchors resolved and the region was replaced.
    Patched(SpliceReport),
    /// An anchor did not resolve; nothing was changed.
    Aborted(Anchor),
}

impl SpliceOutcome {
    /// True for [`SpliceOutcome::Patched`].
    pub fn is_patched(&self) -> bool {
        matches!(self, SpliceOutcome::Patched(_))
    }
}

/// Splices `payload` into `document` between the anchors.
///
/// # Returns
///
/// * `Patched` with the new document when both anchors resolve.
/// * `Aborted` naming the first unresolved anchor otherwise.
/// * `Aborted(Anchor::End)` when the end boundary precedes the start boundary.
pub fn splice(
    document: &Document,
    anchors: &AnchorSet,
    payload: &Payload,
) -> AppResult<SpliceOutcome> {
    let bounds = anchors.resolve(document.lines());
    tracing::debug!(start = ?bounds.start, end = ?bounds.end, "resolved anchors");

    let (start, end) = match (bounds.start, bounds.end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            let missing = bounds.missing().unwrap_or(Anchor::Start);
            tracing::warn!(anchor = %missing, "anchor not found, leaving document untouched");
            return Ok(SpliceOutcome::Aborted(missing));
        }
    };

    if end < start {
        tracing::warn!(
            start,
            end,
            "end boundary precedes start boundary, leaving document untouched"
        );
        return Ok(SpliceOutcome::Aborted(Anchor::End));
    }

    let patched = document.replace_range(start, end, payload.lines())?;
    Ok(SpliceOutcome::Patched(SpliceReport {
        document: patched,
        start,
        end,
        removed: end - start,
        inserted: payload.len(),
    }))
}

/// Splices the file at `path` in place.
///
/// The file is written only when the outcome is `Patched`.
pub fn apply_to_file(
    path: &Path,
    anchors: &AnchorSet,
    payload: &Payload,
) -> AppResult<SpliceOutcome> {
    let document = Document::load(path)?;
    let outcome = splice(&document, anchors, payload)?;

    if let SpliceOutcome::Patched(report) = &outcome {
        report.document.save(path)?;
        tracing::info!(
            path = %path.display(),
            start = report.start,
            end = report.end,
            removed = report.removed,
            inserted = report.inserted,
            "patched file"
        );
    }

    Ok(outcome)
}

/// Runs a full recipe: resolves its payload and splices its target.
pub fn apply_recipe(recipe: &PatchRecipe) -> AppResult<SpliceOutcome> {
    let payload = recipe.resolve_payload()?;
    apply_to_file(&recipe.target, &recipe.anchors(), &payload)
}
