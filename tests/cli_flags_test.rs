use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_dockdeck");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("dockdeck ").unwrap_or("");
    assert_eq!(
        version,
        env!("CARGO_PKG_VERSION"),
        "Binary version should match CARGO_PKG_VERSION"
    );
}

#[test]
fn test_short_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_dockdeck");

    let output = Command::new(binary_path)
        .arg("-V")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("dockdeck "));
}

#[test]
fn test_help_flag_lists_environment() {
    let binary_path = env!("CARGO_BIN_EXE_dockdeck");

    let output = Command::new(binary_path)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "Help flag should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: dockdeck"));
    assert!(stdout.contains("DOCKDECK_LOG"));
}
