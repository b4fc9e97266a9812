#![deny(missing_docs)]

//! # Line Splice CLI
//!
//! Rewrites one region of a source file: everything between the end of a
//! known method and the doc comment of another known method is replaced by a
//! fixed block of new methods.
//!
//! With no arguments it performs the fluent seedable-random builder edit on
//! `UnitTestProject1/Helpers/TestFluentSeedableRandom.cs`.

use clap::Parser;
use std::process::ExitCode;

use crate::error::CliResult;

mod apply;
mod error;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Splice a fixed block of methods between two anchors")]
struct Cli {
    #[clap(flatten)]
    apply: apply::ApplyArgs,

    /// Increase diagnostic output on stderr (-v info, -vv debug).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let outcome = apply::execute(&cli.apply)?;
    if outcome.is_patched() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
