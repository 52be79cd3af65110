//! Diagnostic logging setup
//!
//! Events go to stderr as plain text. The filter is fixed rather than read
//! from the environment, and sits at `warn` so that a usage error leaves
//! nothing on stderr except the usage line.

use tracing_subscriber::EnvFilter;

/// Filter directive applied to every run
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_DIRECTIVE))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::debug!("filtered out at the default level");
    }
}
