//! The local repo directory under the working directory
//!
//! Downloaded packages and createrepo metadata live in `<workdir>/repo`.
//! Nothing else is persisted between invocations.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::Error;
use crate::exec;

/// Resolve `<workdir>/repo`, creating it if absent. Safe to call against a
/// directory that already exists from a previous run.
pub fn ensure_repo_dir(workdir: &Path) -> Result<PathBuf> {
    let repo_path = workdir.join("repo");
    fs::create_dir_all(&repo_path)
        .with_context(|| format!("Failed creating repo directory: {}", repo_path.display()))?;
    Ok(repo_path)
}

/// Count the `*.rpm` files sitting directly in `dir`.
pub fn count_rpms(dir: &Path) -> Result<usize> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed reading repo directory: {}", dir.display()))?;
    let mut count = 0;
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "rpm") {
            count += 1;
        }
    }
    Ok(count)
}

/// Run `createrepo` over the directory so dnf can consume it as a repo.
pub fn create_repo_metadata(repo_path: &Path) -> Result<(), Error> {
    info!("Creating the repo: {}", repo_path.display());
    exec::run_checked("createrepo", Command::new("createrepo").arg(repo_path))
}
