//! Command-line handling for dockdeck.
//!
//! The CLI dispatcher runs early in `main()`, before the terminal is taken
//! over:
//!
//! ```ignore
//! use dockdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! // No CLI command, continue to the dashboard
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use help::{handle_help_command, usage};
pub use version::{handle_version_command, version_string, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `true` if the command was handled and the process should exit,
/// `false` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            handle_version_command();
            true
        }
        CliCommand::Help => {
            handle_help_command();
            true
        }
        CliCommand::RunTui => false,
    }
}
