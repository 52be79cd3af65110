//! Validate the invocation, then delegate or report usage

mod launcher;

pub use launcher::{Launcher, ProcessLauncher};

use crate::cli::parse_invocation;
use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::exit;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;

/// Runs one invocation: validate, spawn once, propagate the exit code
pub struct Dispatcher<L = ProcessLauncher> {
    config: DispatchConfig,
    launcher: L,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(config: DispatchConfig, launcher: L) -> Self {
        Dispatcher { config, launcher }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run the dispatch and return the process exit code
    ///
    /// Errors are written to `stderr` as a single line. Nothing is ever
    /// written to stdout.
    pub fn run<I, W>(&self, args: I, stderr: &mut W) -> i32
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
        W: Write,
    {
        match self.dispatch(args) {
            Ok(code) => code,
            Err(err) => {
                // Nothing useful to do if stderr itself is gone
                writeln!(stderr, "{}", err).ok();
                stderr.flush().ok();
                err.exit_code()
            }
        }
    }

    /// Validate `args` (program name first) and run the delegate
    ///
    /// Returns the delegate's exit code. The delegate is spawned at most
    /// once and never when validation fails.
    pub fn dispatch<I>(&self, args: I) -> Result<i32, DispatchError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let invocation = parse_invocation(args, &self.config.fallback_program)?;
        debug!(
            program = %invocation.program,
            direction = %invocation.direction,
            "invocation accepted"
        );

        let delegate = self.config.delegate();
        let status = self
            .launcher
            .launch(delegate, invocation.direction)
            .map_err(|source| DispatchError::Launch {
                program: invocation.program,
                path: delegate.to_path_buf(),
                source,
            })?;

        let code = exit::child_exit_code(status);
        debug!(code, "delegate finished");
        Ok(code)
    }
}

/// Entry point used by the binary
///
/// Dispatches to the installed croutoncycle with the real stderr.
pub fn run_dispatch<I>(args: I) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let dispatcher = Dispatcher::new(DispatchConfig::default(), ProcessLauncher);
    dispatcher.run(args, &mut io::stderr().lock())
}
