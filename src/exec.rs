//! Blocking subprocess invocation
//!
//! Every external tool is run to completion with inherited stdio so its
//! output lands in the test log unchanged. No timeouts: a hanging tool
//! hangs the caller, matching the surrounding tmt plan's own timeout.

use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::Error;

/// Run a command and require a zero exit status.
pub fn run_checked(tool: &'static str, cmd: &mut Command) -> Result<(), Error> {
    let status = run(tool, cmd)?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Tool { tool, status })
    }
}

/// Run a command and hand the exit status back to the caller unjudged.
pub fn run(tool: &'static str, cmd: &mut Command) -> Result<ExitStatus, Error> {
    debug!("running: {:?}", cmd);
    cmd.status().map_err(|source| Error::Spawn { tool, source })
}
