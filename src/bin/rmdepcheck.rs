//! testrepo-rmdepcheck: run the dependency-removal check
//!
//! Exits with the checker's own exit code, so this uses `process::exit`
//! rather than `ExitCode` to forward values like 17 untouched.

use std::process;

use clap::Parser;
use fedora_testrepo::cli::{self, rmdepcheck};

fn main() {
    let args = rmdepcheck::CheckArgs::parse();
    cli::init_logging(args.common.verbose);

    match rmdepcheck::run(args) {
        Ok(code) => process::exit(code),
        Err(err) => process::exit(i32::from(cli::report_failure(&err))),
    }
}
