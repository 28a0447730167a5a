//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

/// A small BitBake dump with the usual noise around its edge statements.
pub const SIMPLE_DOT: &str = r#"
digraph depends {
  "boost" -> "libc"
  "image" -> "htmlext"
  "htmlext" -> "libhext"
  "htmlext" -> "boost-program-options"
  "libhext" -> "ragel"
  "libhext" -> "boost-regex"
  garbage input
  "nope"
  "boost-regex" -> "boost"
  "boost-program-options" -> "boost"
}
"#;

/// Writes `contents` to a fresh temporary file.
pub fn dump_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Runs the rdepends binary with `args`.
pub fn run_rdepends(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rdepends"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute rdepends binary")
}

/// Runs the rdepends binary on `file` followed by `args`.
pub fn run_on_file(file: &Path, args: &[&str]) -> Output {
    let file = file.to_str().expect("temp path is UTF-8");
    let mut all = vec![file];
    all.extend_from_slice(args);
    run_rdepends(&all)
}

/// Runs the rdepends binary with `stdin` piped in.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rdepends"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn rdepends binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child
        .wait_with_output()
        .expect("Failed to wait for rdepends binary")
}

/// Stdout split into lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Stdout lines, sorted.
pub fn sorted_stdout(output: &Output) -> Vec<String> {
    let mut lines = stdout_lines(output);
    lines.sort_unstable();
    lines
}
