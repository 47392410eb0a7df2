//! End-to-end tests for the tgfmt binary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Value, json};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_tgfmt") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("tgfmt");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "tgfmt_cli_{}_{}_{}.html",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn html_flag_prints_text_and_entities() {
    let output = run(&["--html", "<b>bold <i>both</i></b>"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "text": "bold both",
            "entities": [
                {"type": "bold", "offset": 0, "length": 9},
                {"type": "italic", "offset": 5, "length": 4},
            ],
        })
    );
}

#[test]
fn reads_html_from_stdin() {
    let output = run_with_stdin(&[], "<a href=\"https://t.me\">link</a>");
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "text": "link",
            "entities": [
                {"type": "text_link", "offset": 0, "length": 4, "url": "https://t.me"},
            ],
        })
    );
}

#[test]
fn reads_html_from_file() {
    let input = temp_file("file", "<code>x</code> &amp; y");
    let output = run(&[input.to_str().expect("path")]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["text"], "x & y");
    assert_eq!(value["entities"][0]["type"], "code");
}

#[test]
fn missing_file_is_an_error() {
    let output = run(&["/nonexistent/tgfmt/input.html"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}

#[test]
fn check_reports_warnings_and_exit_code() {
    let output = run_with_stdin(&["--check"], "<b>unclosed");
    assert!(!output.status.success(), "expected error exit code");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unclosed-tag"), "stderr: {stderr}");
}

#[test]
fn check_passes_clean_markup() {
    let output = run(&["--check", "--html", "<b>fine</b>"]);
    assert!(output.status.success());
}

#[test]
fn warnings_flag_keeps_json_on_stdout() {
    let output = run(&["--warnings", "--html", "<div>x</div>"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["text"], "x");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported-tag"), "stderr: {stderr}");
}

#[test]
fn repeated_html_joins_with_separator() {
    let output = run(&["--html", "<b>one</b>", "--html", "<i>two</i>", "--separator", " | "]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "text": "one | two",
            "entities": [
                {"type": "bold", "offset": 0, "length": 3},
                {"type": "italic", "offset": 6, "length": 3},
            ],
        })
    );
}

#[test]
fn prefix_shifts_body_entities() {
    let output = run(&["--prefix", "<i>😀</i> ", "--html", "<b>x</b>"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "text": "😀 x",
            "entities": [
                {"type": "italic", "offset": 0, "length": 2},
                {"type": "bold", "offset": 3, "length": 1},
            ],
        })
    );
}

#[test]
fn file_and_html_conflict() {
    let output = run(&["input.html", "--html", "<b>x</b>"]);
    assert!(!output.status.success());
}
