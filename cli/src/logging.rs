#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. Diagnostics go to stderr so stdout
//! carries only the one-line result notice.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "splice_core=info,line_splice=info",
        _ => "splice_core=debug,line_splice=debug",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` overrides `verbose`.
pub fn init(verbose: u8) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
