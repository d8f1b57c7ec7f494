//! Launching commands that are not builtins.

use crate::registry::ExitCode;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Run an external program with inherited standard streams and wait for it.
///
/// The name is handed to the OS spawn facility as-is; PATH lookup for the
/// actual launch is the OS's business. The error case is a spawn that never
/// started (most commonly `NotFound`), which the dispatcher turns into a
/// "command not found" report.
pub fn run(name: &str, args: &[String]) -> io::Result<ExitCode> {
    let mut child = Command::new(name)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;
    let exit_status = child.wait()?;
    match exit_status.code() {
        Some(x) => Ok(x),
        None => Ok(terminated_by_signal(exit_status)),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}
