//! Dispatch configuration

use std::path::{Path, PathBuf};

/// Where croutoncycle is installed
pub const DEFAULT_DELEGATE: &str = "/usr/local/bin/croutoncycle";

/// Program name for the usage line when argv[0] is unavailable
pub const DEFAULT_PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Settings for a [`Dispatcher`](crate::dispatch::Dispatcher)
///
/// The binary always runs with [`DispatchConfig::default`]; nothing is read
/// from the environment or from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Executable that receives the validated direction
    pub delegate: PathBuf,
    /// Name shown in the usage line if the OS supplied no argv[0]
    pub fallback_program: String,
}

impl DispatchConfig {
    /// Default settings with a different delegate executable
    pub fn with_delegate(delegate: impl Into<PathBuf>) -> Self {
        DispatchConfig {
            delegate: delegate.into(),
            ..Self::default()
        }
    }

    pub fn delegate(&self) -> &Path {
        &self.delegate
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            delegate: PathBuf::from(DEFAULT_DELEGATE),
            fallback_program: DEFAULT_PROGRAM_NAME.to_string(),
        }
    }
}
