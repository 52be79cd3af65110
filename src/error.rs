//! Error types for cycle-dispatch

use crate::cli::usage_line;
use crate::exit;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a dispatch short of the delegate's own exit code
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Missing, extra or unrecognised argument. Displays as the usage line.
    #[error("{}", usage_line(.program))]
    Usage { program: String },

    /// The delegate executable could not be started
    #[error("{program}: cannot run {}: {source}", .path.display())]
    Launch {
        program: String,
        path: PathBuf,
        source: io::Error,
    },
}

impl DispatchError {
    /// Process exit code this error terminates with
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Usage { .. } => exit::EXIT_USAGE,
            DispatchError::Launch { source, .. } => exit::launch_failure_code(source),
        }
    }
}
