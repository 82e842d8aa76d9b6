//! Shared command-line plumbing for the two binaries
//!
//! Both tools take the same `--arch`/`--workdir` pair, log through tracing
//! to stderr, and map failures to the exit codes documented in
//! [`crate::error`].

use std::io;
use std::path::PathBuf;

use clap::Args;
use tracing::{error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, EXIT_UNEXPECTED};

pub mod prepare;
pub mod rmdepcheck;

/// Options common to both tools.
#[derive(Args)]
pub struct CommonArgs {
    /// Target package architecture
    #[arg(long, value_name = "ARCH", default_value = "x86_64")]
    pub arch: String,

    /// Working directory; the repo is created/consumed at <WORKDIR>/repo
    #[arg(long, value_name = "PATH", env = "TMT_PLAN_DATA", default_value = ".")]
    pub workdir: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Wire the verbose flag to the tracing log level.
/// RUST_LOG in the environment always takes precedence; the default is INFO
/// so the progress lines show up in CI logs, --verbose lifts it to DEBUG.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Log a top-level failure and classify it into an exit code.
///
/// Domain failures keep their one-line message; anything unexpected is
/// logged with its full error chain.
pub fn report_failure(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(known) if known.is_domain_failure() => {
            error!("{known}");
            known.exit_code()
        }
        Some(known) => {
            error!("{err:#}");
            known.exit_code()
        }
        None => {
            error!("unexpected failure: {err:#}");
            EXIT_UNEXPECTED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_DOMAIN_FAILURE;

    #[test]
    fn domain_errors_map_to_exit_one() {
        let err = anyhow::Error::from(Error::NoPackages { dir: PathBuf::from("repo") });
        assert_eq!(report_failure(&err), EXIT_DOMAIN_FAILURE);
    }

    #[test]
    fn plain_anyhow_errors_map_to_exit_two() {
        let err = anyhow::anyhow!("disk fell off");
        assert_eq!(report_failure(&err), EXIT_UNEXPECTED);
    }

    #[test]
    fn unsupported_distro_maps_to_exit_two() {
        let err = anyhow::Error::from(Error::UnsupportedDistro("eln".into()));
        assert_eq!(report_failure(&err), EXIT_UNEXPECTED);
    }
}
