//! Turning the raw process arguments into a validated invocation

use crate::cli::args::{Cli, Direction};
use crate::error::DispatchError;
use clap::{Parser, ValueEnum};
use std::ffi::{OsStr, OsString};
use tracing::debug;

/// A validated request: who we were invoked as, and which way to cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub direction: Direction,
}

/// Parse the full argument vector (program name first)
///
/// Exactly one argument must follow the program name. The count is checked
/// before clap sees anything, so `-- prev` is two arguments and rejected
/// rather than treated as an option terminator. Every clap error, including
/// unknown flags and non-UTF-8 input, collapses into a usage error.
pub fn parse_invocation<I>(args: I, fallback_program: &str) -> Result<Invocation, DispatchError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = program_name(args.next().as_deref(), fallback_program);
    let rest: Vec<OsString> = args.collect();

    if rest.len() != 1 {
        debug!(count = rest.len(), "rejecting invocation: expected exactly one argument");
        return Err(DispatchError::Usage { program });
    }

    let argv = std::iter::once(OsString::from(&program)).chain(rest);
    match Cli::try_parse_from(argv) {
        Ok(cli) => Ok(Invocation {
            program,
            direction: cli.direction,
        }),
        Err(err) => {
            debug!(kind = ?err.kind(), "rejecting invocation: argument not accepted");
            Err(DispatchError::Usage { program })
        }
    }
}

/// Name to show in the usage line
///
/// This is argv[0] exactly as the caller supplied it. When the OS gives us
/// no argv[0] (or an empty one) the configured fallback is used instead.
pub fn program_name(argv0: Option<&OsStr>, fallback: &str) -> String {
    match argv0 {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => fallback.to_string(),
    }
}

/// Render `Usage: <program> prev|next`
pub fn usage_line(program: &str) -> String {
    let accepted: Vec<&str> = Direction::value_variants()
        .iter()
        .map(|direction| direction.as_str())
        .collect();
    format!("Usage: {} {}", program, accepted.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "cycle-dispatch";

    fn parse(args: &[&str]) -> Result<Invocation, DispatchError> {
        parse_invocation(args.iter().copied(), FALLBACK)
    }

    fn assert_usage(args: &[&str]) {
        match parse(args) {
            Err(DispatchError::Usage { program }) => assert_eq!(program, args[0]),
            other => panic!("expected usage error for {:?}, got {:?}", args, other),
        }
    }

    #[test]
    fn test_accepts_prev_and_next() {
        let invocation = parse(&["xbmc-cycle", "prev"]).unwrap();
        assert_eq!(invocation.program, "xbmc-cycle");
        assert_eq!(invocation.direction, Direction::Prev);

        let invocation = parse(&["/usr/bin/cycle", "next"]).unwrap();
        assert_eq!(invocation.program, "/usr/bin/cycle");
        assert_eq!(invocation.direction, Direction::Next);
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert_usage(&["cycle"]);
        assert_usage(&["cycle", "prev", "next"]);
        assert_usage(&["cycle", "next", "next"]);
    }

    #[test]
    fn test_rejects_values_outside_accepted_set() {
        for bad in ["Prev", "NEXT", "", "foo", "pre", "nextt", " prev", "prev "] {
            assert_usage(&["cycle", bad]);
        }
    }

    #[test]
    fn test_flags_are_not_special() {
        assert_usage(&["cycle", "--help"]);
        assert_usage(&["cycle", "-h"]);
        assert_usage(&["cycle", "--version"]);
        assert_usage(&["cycle", "--"]);
        assert_usage(&["cycle", "--", "prev"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_non_utf8_argument() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("cycle"),
            OsString::from_vec(vec![b'p', 0xff, b'v']),
        ];
        assert!(matches!(
            parse_invocation(args, FALLBACK),
            Err(DispatchError::Usage { .. })
        ));
    }

    #[test]
    fn test_missing_argv0_uses_fallback() {
        let empty: [&str; 0] = [];
        match parse_invocation(empty, FALLBACK) {
            Err(DispatchError::Usage { program }) => assert_eq!(program, FALLBACK),
            other => panic!("expected usage error, got {:?}", other),
        }

        assert_eq!(program_name(Some(OsStr::new("")), FALLBACK), FALLBACK);
        assert_eq!(program_name(None, FALLBACK), FALLBACK);
    }

    #[test]
    fn test_usage_line_format() {
        assert_eq!(usage_line("xbmc-cycle"), "Usage: xbmc-cycle prev|next");
        assert_eq!(
            usage_line("/usr/local/bin/xbmc-cycle"),
            "Usage: /usr/local/bin/xbmc-cycle prev|next"
        );
    }
}
