#![deny(missing_docs)]

//! # Splice Core
//!
//! Line-range splicing of text files: find two literal anchors, drop the
//! lines between them, insert a fixed payload, and write the file back.

/// Shared error types.
pub mod error;

/// Line-preserving document model.
pub mod document;

/// Boundary search.
pub mod anchor;

/// Insertion payloads.
pub mod payload;

/// Recipe (configuration) loading.
pub mod recipe;

/// Splice and apply operations.
pub mod splice;

pub use anchor::{find_end_boundary, find_start_boundary, Anchor, AnchorSet, Boundaries};
pub use document::Document;
pub use error::{AppError, AppResult};
pub use payload::Payload;
pub use recipe::PatchRecipe;
pub use splice::{apply_recipe, apply_to_file, splice, SpliceOutcome, SpliceReport};
