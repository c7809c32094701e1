//! End-to-end tests for the `counted` binary.

mod common;

use common::{counted_command, run_counted};
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_bare_invocation_prints_square_then_count() {
    let dir = TempDir::new().unwrap();
    counted_command(&dir).assert().success().stdout("100\n2\n");
}

#[test]
fn test_lengths_and_report_index() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["3", "4", "5", "--report", "2"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "25\n3\n");
}

#[test]
fn test_explicit_run_subcommand_in_parallel() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["run", "-6", "1", "2", "--parallel"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "36\n3\n");
}

#[test]
fn test_overflowing_square_wraps() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["46341"]);

    assert_eq!(result.stdout, "-2147479015\n1\n");
}

#[test]
fn test_report_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["--report", "5"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("out of range"), "stderr: {}", result.stderr);
}

#[test]
fn test_discovered_config_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".counted.toml"),
        indoc! {r#"
            [run]
            lengths = [2, 9, 4]
            report = 1
        "#},
    )
    .unwrap();

    let result = run_counted(&dir, &[]);
    assert_eq!(result.stdout, "81\n3\n");
}

#[test]
fn test_cli_lengths_override_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".counted.toml"), "[run]\nlengths = [2, 9]\n").unwrap();

    let result = run_counted(&dir, &["7"]);
    assert_eq!(result.stdout, "49\n1\n");
}

#[test]
fn test_malformed_discovered_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".counted.toml"), "[run\n").unwrap();

    let result = run_counted(&dir, &[]);
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "100\n2\n");
}

#[test]
fn test_malformed_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("custom.toml"), "[run]\nreport = \"x\"\n").unwrap();

    let result = run_counted(&dir, &["--config", "custom.toml"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Configuration error"), "stderr: {}", result.stderr);
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["--output", "report.txt"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("report.txt")).unwrap(),
        "100\n2\n"
    );
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["-vv"]);

    assert_eq!(result.stdout, "100\n2\n");
    assert!(
        result.stderr.contains("constructed counted value"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_init_writes_config_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    let first = run_counted(&dir, &["init"]);
    assert_eq!(first.exit_code, 0);
    assert!(dir.path().join(".counted.toml").exists());

    let second = run_counted(&dir, &["init"]);
    assert_eq!(second.exit_code, 1);
    assert!(second.stderr.contains("--force"), "stderr: {}", second.stderr);

    let forced = run_counted(&dir, &["init", "--force"]);
    assert_eq!(forced.exit_code, 0);

    let result = run_counted(&dir, &[]);
    assert_eq!(result.stdout, "100\n2\n");
}

#[test]
fn test_verbosity_before_init_subcommand() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["-v", "init"]);

    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert!(dir.path().join(".counted.toml").exists());
}

#[test]
fn test_verbosity_before_run_subcommand() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["-vv", "run", "3"]);

    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "9\n1\n");
    assert!(result.stderr.contains("constructed counted value"));
}

#[test]
fn test_piped_logs_have_no_ansi_escapes() {
    let dir = TempDir::new().unwrap();
    let result = run_counted(&dir, &["-vv"]);

    assert!(!result.stderr.is_empty());
    assert!(!result.stderr.contains('\u{1b}'), "stderr: {:?}", result.stderr);
}
