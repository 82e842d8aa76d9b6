//! The prepare tool: download artifacts and index them as a repo

use std::path::Path;
use std::process::Command;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::cli::CommonArgs;
use crate::error::Error;
use crate::exec;
use crate::repo;

/// Download a Koji task's or Bodhi update's artifacts into <WORKDIR>/repo
/// and index the directory with createrepo
#[derive(Parser)]
#[command(name = "testrepo-prepare")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PrepareArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand)]
pub enum Action {
    /// Download the artifacts of a Koji task
    KojiTask {
        /// Koji task identifier
        task_id: String,
    },

    /// Download the packages of a Bodhi update
    BodhiUpdate {
        /// Bodhi update identifier (e.g. FEDORA-2026-0123abcdef)
        update_id: String,
    },
}

pub fn run(args: PrepareArgs) -> Result<()> {
    let repo_path = repo::ensure_repo_dir(&args.common.workdir)?;

    match &args.action {
        Action::KojiTask { task_id } => koji_task(task_id, &args.common.arch, &repo_path)?,
        Action::BodhiUpdate { update_id } => {
            bodhi_update(update_id, &args.common.arch, &repo_path)?
        }
    }

    repo::create_repo_metadata(&repo_path)?;
    Ok(())
}

fn koji_task(task_id: &str, arch: &str, repo_path: &Path) -> Result<()> {
    info!("Preparing environment for Koji task {task_id}, arch {arch}");

    info!("Downloading artifacts from Koji");
    exec::run_checked(
        "koji",
        Command::new("koji")
            .args(["download-task", task_id, "--arch=noarch"])
            .arg(format!("--arch={arch}"))
            .current_dir(repo_path),
    )?;
    Ok(())
}

fn bodhi_update(update_id: &str, arch: &str, repo_path: &Path) -> Result<()> {
    info!("Preparing environment for Bodhi update {update_id}, arch {arch}");

    info!("Downloading artifacts from Bodhi");
    exec::run_checked(
        "bodhi",
        Command::new("bodhi")
            .args(["updates", "download"])
            .arg(format!("--updateid={update_id}"))
            .arg(format!("--arch={arch}"))
            .current_dir(repo_path),
    )?;

    // bodhi updates download does not fail on failed downloads, so insist on
    // at least one rpm before handing the directory to createrepo.
    if repo::count_rpms(repo_path)? == 0 {
        return Err(Error::NoPackages { dir: repo_path.to_path_buf() }.into());
    }
    Ok(())
}
