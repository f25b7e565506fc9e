//! hookbell CLI - lifecycle hook dispatcher for Claude Code.

use clap::Parser;
use clap::error::ErrorKind;
use hookbell::cli;
use std::process::ExitCode;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("HOOKBELL_GIT_HASH");
    const IS_RELEASE: &str = env!("HOOKBELL_IS_RELEASE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "hookbell")]
#[command(author, version = version(), about = "Lifecycle hook dispatcher for Claude Code", long_about = None)]
struct Cli {
    /// Hook event name (PreToolUse, Stop, ...). Falls back to the payload's
    /// `event_type` field.
    event: Option<String>,
}

/// Event name from argv.
///
/// Only the first argument counts. Extra or unrecognized arguments must not
/// cost the host its decision, so a parse failure falls back to `args[1]`.
fn event_arg<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => cli.event,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => args.get(1).cloned(),
    }
}

fn main() -> ExitCode {
    let event = event_arg(std::env::args());

    match cli::hook::run(event.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Hook handler error: {e}");
            ExitCode::from(cli::hook::BLOCKING_EXIT_CODE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn single_event_argument() {
        assert_eq!(
            event_arg(args(&["hookbell", "Stop"])),
            Some("Stop".to_string())
        );
    }

    #[test]
    fn no_argument() {
        assert_eq!(event_arg(args(&["hookbell"])), None);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(
            event_arg(args(&["hookbell", "Stop", "extra", "--more"])),
            Some("Stop".to_string())
        );
    }

    #[test]
    fn unknown_flag_becomes_event_name() {
        assert_eq!(
            event_arg(args(&["hookbell", "-x"])),
            Some("-x".to_string())
        );
    }
}
