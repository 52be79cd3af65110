//! Spawning the delegate executable

use crate::cli::Direction;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Runs the delegate once and waits for it
pub trait Launcher {
    fn launch(&self, delegate: &Path, direction: Direction) -> io::Result<ExitStatus>;
}

/// Launcher backed by a real child process
///
/// The child inherits stdin, stdout, stderr and the environment. There is no
/// timeout: the wait lasts as long as the child does.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, delegate: &Path, direction: Direction) -> io::Result<ExitStatus> {
        debug!(delegate = %delegate.display(), %direction, "spawning delegate");
        Command::new(delegate).arg(direction.as_str()).status()
    }
}
