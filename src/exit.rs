//! Exit code conventions
//!
//! A successful dispatch exits with the delegate's own code. The remaining
//! codes follow the shell:
//! - 2: usage error (missing, extra or unrecognised argument)
//! - 126: delegate exists but could not be executed
//! - 127: delegate not found
//! - 128 + N: delegate killed by signal N
//! - 1: any other launch failure

use std::io;
use std::process::ExitStatus;

pub const EXIT_USAGE: i32 = 2;
pub const EXIT_LAUNCH_FAILURE: i32 = 1;
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
pub const EXIT_NOT_FOUND: i32 = 127;

#[cfg(unix)]
const SIGNAL_EXIT_BASE: i32 = 128;

/// Exit code for a delegate that could not be spawned
pub fn launch_failure_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
        _ => EXIT_LAUNCH_FAILURE,
    }
}

/// Exit code to propagate for a delegate that ran to completion
pub fn child_exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        use tracing::warn;

        if let Some(signal) = status.signal() {
            warn!(signal, "delegate terminated by signal");
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    EXIT_LAUNCH_FAILURE
}
