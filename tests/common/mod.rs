// Test utility module for counted integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Command for the `counted` binary, isolated from the caller's environment.
pub fn counted_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("counted").expect("counted binary should be built");
    cmd.current_dir(dir.path())
        .env_remove("COUNTED_CONFIG")
        .env_remove("COUNTED_LOG");
    cmd
}

/// Run the binary in `dir` with `args` and capture its output.
pub fn run_counted(dir: &TempDir, args: &[&str]) -> BinaryResult {
    let output = counted_command(dir)
        .args(args)
        .output()
        .expect("failed to execute counted");

    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}
