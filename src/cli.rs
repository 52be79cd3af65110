//! CLI argument parsing and usage reporting

pub mod args;
pub mod invocation;

// Re-export types for convenient access
pub use args::{Cli, Direction};
pub use invocation::{Invocation, parse_invocation, program_name, usage_line};
