//! `--help` output.

use crate::config::{CACHE_CLEANUP_ENV, LOG_ENV, OUTBOX_CAPACITY_ENV, PRUNE_TTL_ENV};

/// Usage text, including the environment variables read at startup.
pub fn usage() -> String {
    format!(
        "\
Terminal dashboard for a container daemon

Usage: dockdeck [OPTIONS]

Options:
  -h, --help       Print help
  -V, --version    Print version

Environment:
  {:<28} Log filter (default: info)
  {:<28} Seconds a prune report stays cached (default: 30)
  {:<28} Seconds between cache cleanups (default: 30)
  {:<28} Undelivered status messages kept (default: 0)

Press ? inside the dashboard for key bindings.",
        LOG_ENV, PRUNE_TTL_ENV, CACHE_CLEANUP_ENV, OUTBOX_CAPACITY_ENV
    )
}

pub fn handle_help_command() {
    println!("{}", usage());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_flags_and_env() {
        let text = usage();
        assert!(text.contains("--version"));
        assert!(text.contains("--help"));
        assert!(text.contains("DOCKDECK_LOG"));
        assert!(text.contains("DOCKDECK_OUTBOX_CAPACITY"));
    }
}
