//! testrepo-prepare: build a local package repo from Koji or Bodhi artifacts

use std::process::ExitCode;

use clap::Parser;
use fedora_testrepo::cli::{self, prepare};

fn main() -> ExitCode {
    let args = prepare::PrepareArgs::parse();
    cli::init_logging(args.common.verbose);

    match prepare::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(cli::report_failure(&err)),
    }
}
