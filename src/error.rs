//! Error taxonomy and exit-code classification
//!
//! Callers of these tools (tmt test plans, CI automation) key off three exit
//! codes: 0 success, 1 known domain failure, 2 anything unexpected. The
//! rmdepcheck runner additionally forwards the checker's own exit code
//! verbatim, so any other value means "the checker said so".

use std::path::PathBuf;
use std::process::ExitStatus;

/// Process exit code for failures the workflow knows about: an external tool
/// exited non-zero, or a download produced no packages.
pub const EXIT_DOMAIN_FAILURE: u8 = 1;

/// Process exit code for everything else (tool missing, Bodhi unreachable,
/// unsupported distro, io errors).
pub const EXIT_UNEXPECTED: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An invoked external tool ran but exited non-zero.
    #[error("{tool} failed with {status}")]
    Tool { tool: &'static str, status: ExitStatus },

    /// An external tool could not be launched at all.
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The download tool exited 0 but the repo directory holds no rpms.
    /// `bodhi updates download` is known to do this on failed downloads.
    #[error("no rpms were downloaded into {}", .dir.display())]
    NoPackages { dir: PathBuf },

    /// Only `fedora-*` distros are supported for now (not epel, not eln).
    #[error("distro family not supported: {0}")]
    UnsupportedDistro(String),

    /// The normalized branch has no entry in the Bodhi alias table.
    #[error("branch {0} not found in the Fedora release table")]
    UnknownBranch(String),

    /// Fetching or decoding the Bodhi releases payload failed.
    #[error("could not obtain the Fedora release table: {0}")]
    AliasFetch(#[source] anyhow::Error),
}

impl Error {
    /// True for the failures documented as exit code 1; everything else is
    /// reported as unexpected (exit code 2).
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, Error::Tool { .. } | Error::NoPackages { .. })
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_domain_failure() {
            EXIT_DOMAIN_FAILURE
        } else {
            EXIT_UNEXPECTED
        }
    }
}
