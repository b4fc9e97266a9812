#![deny(missing_docs)]

//! # Patch Recipe
//!
//! Configuration for one splice: which file to edit, which anchors bound the
//! region, and what to put in it. The default recipe is the fluent
//! seedable-random builder edit; other recipes load from YAML or JSON.

use crate::anchor::AnchorSet;
use crate::error::AppResult;
use crate::payload::Payload;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file the built-in recipe edits.
pub const DEFAULT_TARGET: &str = "UnitTestProject1/Helpers/TestFluentSeedableRandom.cs";
/// Default start-anchor signature.
pub const DEFAULT_START_SIGNATURE: &str =
    "public TestFluentSeedableRandom ImmediateTackleYards(int value)";
/// Default end-anchor signature.
pub const DEFAULT_END_SIGNATURE: &str = "public TestFluentSeedableRandom KickHangTime(double value)";
/// Default doc-comment marker searched above the end signature.
pub const DEFAULT_DOC_MARKER: &str = "/// <summary>";

/// A complete description of one splice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PatchRecipe {
    /// File to rewrite in place.
    pub target: PathBuf,
    /// Signature of the method the splice starts after.
    pub start_signature: String,
    /// Signature of the method the splice ends before.
    pub end_signature: String,
    /// Doc-comment marker opening the block above the end method.
    pub doc_marker: String,
    /// Payload file; `None` selects the built-in payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<PathBuf>,
}

impl Default for PatchRecipe {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            start_signature: DEFAULT_START_SIGNATURE.to_string(),
            end_signature: DEFAULT_END_SIGNATURE.to_string(),
            doc_marker: DEFAULT_DOC_MARKER.to_string(),
            payload: None,
        }
    }
}

impl PatchRecipe {
    /// Parses a recipe from YAML text.
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parses a recipe from JSON text.
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a recipe file. `.json` files are read as JSON, anything else as YAML.
    ///
    /// A relative `payload` path is resolved against the recipe's directory.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut recipe = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_yaml(&text)?
        };

        if let (Some(payload), Some(dir)) = (&recipe.payload, path.parent()) {
            if payload.is_relative() {
                recipe.payload = Some(dir.join(payload));
            }
        }

        tracing::debug!(recipe = %path.display(), target_file = %recipe.target.display(), "loaded recipe");
        Ok(recipe)
    }

    /// The anchor markers of this recipe.
    pub fn anchors(&self) -> AnchorSet {
        AnchorSet {
            start_signature: self.start_signature.clone(),
            end_signature: self.end_signature.clone(),
            doc_marker: self.doc_marker.clone(),
        }
    }

    /// Loads the configured payload, or the built-in one.
    pub fn resolve_payload(&self) -> AppResult<Payload> {
        match &self.payload {
            Some(path) => Payload::load(path),
            None => Ok(Payload::builtin()),
        }
    }
}
