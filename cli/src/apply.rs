#![deny(missing_docs)]

//! # Apply Command
//!
//! Builds a [`PatchRecipe`] from the recipe file and flags, then splices the
//! target file in place.

use splice_core::{apply_recipe, AppResult, PatchRecipe, SpliceOutcome};
use std::io::{self, Write};
use std::path::PathBuf;

/// Console notice on success.
pub const SUCCESS_NOTICE: &str = "File updated successfully.";
/// Console notice when an anchor is missing.
pub const FAILURE_NOTICE: &str = "Could not find insertion points.";

/// Arguments for the splice. Every flag overrides the matching recipe field.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ApplyArgs {
    /// Recipe file (YAML, or JSON by `.json` extension).
    #[clap(long, env = "LINE_SPLICE_RECIPE")]
    pub recipe: Option<PathBuf>,

    /// File to rewrite in place.
    #[clap(long, env = "LINE_SPLICE_FILE")]
    pub file: Option<PathBuf>,

    /// Signature of the method the splice starts after.
    #[clap(long, env = "LINE_SPLICE_START_SIGNATURE")]
    pub start_signature: Option<String>,

    /// Signature of the method the splice ends before.
    #[clap(long, env = "LINE_SPLICE_END_SIGNATURE")]
    pub end_signature: Option<String>,

    /// Doc-comment marker searched upward from the end signature.
    #[clap(long, env = "LINE_SPLICE_DOC_MARKER")]
    pub doc_marker: Option<String>,

    /// Payload file replacing the built-in methods.
    #[clap(long, env = "LINE_SPLICE_PAYLOAD")]
    pub payload: Option<PathBuf>,
}

impl ApplyArgs {
    /// Merges the recipe file (or the default recipe) with flag overrides.
    pub fn to_recipe(&self) -> AppResult<PatchRecipe> {
        let mut recipe = match &self.recipe {
            Some(path) => PatchRecipe::load(path)?,
            None => PatchRecipe::default(),
        };

        if let Some(file) = &self.file {
            recipe.target = file.clone();
        }
        if let Some(sig) = &self.start_signature {
            recipe.start_signature = sig.clone();
        }
        if let Some(sig) = &self.end_signature {
            recipe.end_signature = sig.clone();
        }
        if let Some(marker) = &self.doc_marker {
            recipe.doc_marker = marker.clone();
        }
        if let Some(payload) = &self.payload {
            recipe.payload = Some(payload.clone());
        }

        Ok(recipe)
    }
}

/// The one-line console notice for an outcome.
pub fn notice(outcome: &SpliceOutcome) -> &'static str {
    match outcome {
        SpliceOutcome::Patched(_) => SUCCESS_NOTICE,
        SpliceOutcome::Aborted(_) => FAILURE_NOTICE,
    }
}

/// Executes the splice and prints the notice to stdout.
pub fn execute(args: &ApplyArgs) -> AppResult<SpliceOutcome> {
    execute_to(args, &mut io::stdout().lock())
}

/// Executes the splice and writes the notice line to `out`.
pub fn execute_to<W: Write>(args: &ApplyArgs, out: &mut W) -> AppResult<SpliceOutcome> {
    let recipe = args.to_recipe()?;
    tracing::info!(target_file = %recipe.target.display(), "applying recipe");

    let outcome = apply_recipe(&recipe)?;
    writeln!(out, "{}", notice(&outcome))?;
    Ok(outcome)
}
