#![forbid(unsafe_code)]

//! cycle-dispatch: hotkey shim for croutoncycle
//!
//! Accepts exactly one argument, `prev` or `next`, and forwards it to the
//! croutoncycle executable, exiting with whatever that executable returns.
//! Anything else prints a usage line to stderr and exits with code 2.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exit;
pub mod logging;

pub use cli::{Direction, Invocation};
pub use config::DispatchConfig;
pub use dispatch::{Dispatcher, Launcher, ProcessLauncher, run_dispatch};
pub use error::DispatchError;
