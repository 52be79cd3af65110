//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use std::fmt;

/// Command-line interface for cycle-dispatch
///
/// Help and version flags are disabled: `-h`, `--help` and `--version` are
/// ordinary (invalid) arguments and produce the usage line like any other
/// bad input.
#[derive(Debug, Parser)]
#[command(name = "cycle-dispatch", about = "Forward prev/next to croutoncycle")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Cycle direction forwarded to croutoncycle
    #[arg(value_enum, value_name = "DIRECTION")]
    pub direction: Direction,
}

/// The accepted command tokens
///
/// Matching is exact and case-sensitive; clap's `ValueEnum` does not fold
/// case unless asked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Token handed to the delegate executable
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
