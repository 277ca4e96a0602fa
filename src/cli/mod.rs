//! CLI module.
//!
//! Handles command-line flags before the TUI starts:
//!
//! ```ignore
//! use lingodeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command.clone()) {
//!     // a CLI command ran; exit with its result
//! }
//! // otherwise start the TUI
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use help::{handle_help_command, help_text};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`, meaning the caller should start the TUI.
/// `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::RunTui { .. } => None,
    }
}
