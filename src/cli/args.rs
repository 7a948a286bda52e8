//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    RunTui,
}

/// Parse command-line arguments and return the command to run.
///
/// The first argument is the program name. The first recognised flag wins;
/// unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use dockdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["dockdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}
