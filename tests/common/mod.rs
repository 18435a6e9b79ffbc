//! Common test utilities for Backpack integration tests

use assert_cmd::Command;

/// Command for the real backpack binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn backpack_cmd() -> Command {
    Command::cargo_bin("backpack").unwrap()
}

/// Join menu answers into stdin text, one answer per line
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// Stdin answers for menu option 1 (add)
#[allow(dead_code)]
pub fn add_item<'a>(name: &'a str, kind: &'a str, quantity: &'a str) -> [&'a str; 4] {
    ["1", name, kind, quantity]
}
