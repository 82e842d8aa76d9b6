//! The check tool: run rmdepcheck against a distro repo plus the local one

use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::aliases;
use crate::cli::CommonArgs;
use crate::error::Error;
use crate::exec;

/// Check that layering <WORKDIR>/repo over a distro's official repo removes
/// no package dependencies
#[derive(Parser)]
#[command(name = "testrepo-rmdepcheck")]
#[command(author, version, about, long_about = None)]
pub struct CheckArgs {
    /// Distro to check against (e.g. fedora-rawhide, fedora-42)
    #[arg(value_name = "DISTRO")]
    pub distro: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Run the checker and hand back its exit code; the binary exits with it
/// verbatim, so automation sees exactly what rmdepcheck reported.
pub fn run(args: CheckArgs) -> Result<i32> {
    let releases = aliases::fedora_all()?;
    let tag = aliases::build_tag(&args.distro, &releases)?;
    let distro_repo = aliases::koji_repo_url(&tag, &args.common.arch);

    let repo_path = args.common.workdir.join("repo");
    let repo_path = repo_path
        .canonicalize()
        .with_context(|| format!("No prepared repo at {}", repo_path.display()))?;
    let local_repo = format!("file://{}", repo_path.display());

    info!("Running rmdepcheck: {distro_repo} + {local_repo}");
    let status = exec::run(
        "rmdepcheck.py",
        Command::new("rmdepcheck.py").arg(&distro_repo).arg(&local_repo),
    )?;

    match status.code() {
        Some(0) => {
            println!("All is good!");
            Ok(0)
        }
        Some(code) => {
            println!("Rmdepcheck failed!");
            Ok(code)
        }
        // Killed by a signal; there is no checker verdict to forward.
        None => Err(Error::Tool { tool: "rmdepcheck.py", status }.into()),
    }
}
