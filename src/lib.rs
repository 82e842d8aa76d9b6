//! fedora-testrepo: package-testing helpers for Fedora update gating
//!
//! Two binaries built from this crate: `testrepo-prepare` downloads the
//! artifacts of a Koji task or a Bodhi update into `<workdir>/repo` and runs
//! `createrepo` over it; `testrepo-rmdepcheck` runs `rmdepcheck.py` against
//! the official Koji repo of a distro plus that locally prepared repo.
//!
//! All heavy lifting is delegated to external tools (`koji`, `bodhi`,
//! `createrepo`, `rmdepcheck.py`); this crate only orchestrates them and
//! maps their outcomes to stable exit codes.

pub mod aliases;
pub mod cli;
pub mod error;
pub mod exec;
pub mod repo;

pub use error::Error;
