//! `--version` output.

/// The current version of dockdeck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("dockdeck {}", VERSION)
}

/// Print the version string.
pub fn handle_version_command() {
    println!("{}", version_string());
}
