//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage and the environment variables read at startup
    Help,
    /// Run the TUI application (default)
    RunTui {
        /// Use the offline provider even when an API key is set
        offline: bool,
    },
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else; unknown arguments are
/// ignored.
///
/// ```
/// use lingodeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["lingodeck".to_string(), "--offline".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui { offline: true });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut offline = false;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--offline" => offline = true,
            _ => {}
        }
    }
    CliCommand::RunTui { offline }
}
