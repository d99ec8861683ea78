//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Output, Stdio};

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_wa", "-", "formatter"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("WA_FORMATTER_MAX_CHARS");
    cmd.env_remove("WA_FORMATTER_COPY_FEEDBACK_MS");
    cmd
}

/// Run with `args` from a temp dir (so dotenv() won't load .env from project root).
fn run(args: &[&str]) -> Output {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    bin()
        .args(args)
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin()
        .args(args)
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let stdout = stdout_of(&run(&["--help"]));
    assert!(stdout.contains("wa-formatter"));
    assert!(stdout.contains("format"));
}

#[test]
fn cli_version_succeeds() {
    let stdout = stdout_of(&run(&["--version"]));
    assert!(stdout.contains("wa-formatter"));
}

#[test]
fn format_promotes_mono_and_strips_spoiler() {
    let stdout = stdout_of(&run(&["format", "`code` and ||secret||"]));
    assert_eq!(stdout, "```code``` and  secret \n");
}

#[test]
fn format_keeps_bold_italic() {
    let stdout = stdout_of(&run(&["format", "*_hi_*"]));
    assert_eq!(stdout, "*_hi_*\n");
}

#[test]
fn format_apply_bold() {
    let stdout = stdout_of(&run(&["format", "--apply", "bold", "hello"]));
    assert_eq!(stdout, "*hello*\n");
}

#[test]
fn format_apply_on_blank_is_noop() {
    let stdout = stdout_of(&run(&["format", "--apply", "mono", "   "]));
    assert_eq!(stdout, "   \n");
}

#[test]
fn format_apply_spoiler_pads_text() {
    let stdout = stdout_of(&run(&["format", "--apply", "spoiler", "hi"]));
    let expected = format!("[SPOILER]{}hi[SPOILER]\n", "\u{200B}".repeat(4000));
    assert_eq!(stdout, expected);
}

#[test]
fn format_reads_stdin() {
    let stdout = stdout_of(&run_with_stdin(&["format", "-"], "`x`\n"));
    assert_eq!(stdout, "```x```\n");
}

#[test]
fn format_json_report() {
    let stdout = stdout_of(&run(&["format", "--json", "`a`"]));
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["input"], "`a`");
    assert_eq!(report["formatted"], "```a```");
    assert_eq!(report["chars"], 3);
    assert_eq!(report["max_chars"], 1000);
    assert_eq!(report["over_limit"], false);
    assert!(report.get("copied").is_none());
}

#[test]
fn format_json_respects_max_chars_env() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["format", "--json", "hello"])
        .env("WA_FORMATTER_MAX_CHARS", "3")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("valid JSON");
    assert_eq!(report["max_chars"], 3);
    assert_eq!(report["over_limit"], true);
}

#[test]
fn invalid_config_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["format", "x"])
        .env("WA_FORMATTER_MAX_CHARS", "many")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("WA_FORMATTER_MAX_CHARS"),
        "expected config error message, got: {}",
        stderr
    );
}

#[test]
fn examples_lists_three_messages() {
    let stdout = stdout_of(&run(&["examples"]));
    assert!(stdout.contains("Example 1"));
    assert!(stdout.contains("Example 3"));
    assert!(stdout.contains("The movie ending:  The butler did it "));
}

#[test]
fn config_shows_defaults() {
    let stdout = stdout_of(&run(&["config"]));
    assert!(stdout.contains("max chars:     1000"));
    assert!(stdout.contains("copy feedback: 2000 ms"));
}

#[test]
fn completions_bash() {
    let stdout = stdout_of(&run(&["completions", "bash"]));
    assert!(stdout.contains("wa-formatter"));
}
