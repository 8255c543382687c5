//! Runs the demo binary against piped stdin, exercising the real terminal.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_demo(args: &[&str], stdin: &[u8]) -> Result<Output, Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_askline-demo"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(stdin)?;
    Ok(child.wait_with_output()?)
}

#[test]
fn invalid_utf8_line_is_reprompted() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_demo(&["scalar", "--type", "whole-number"], b"\xff\xfe\n42\n")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stdout.contains("You entered: 42"), "stdout: {stdout}");
    assert!(stderr.contains("ERROR: That's not a whole number!"), "stderr: {stderr}");
    assert!(stderr.contains("Try again: "), "stderr: {stderr}");
    Ok(())
}

#[test]
fn closed_stdin_fails_the_request() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_demo(&["scalar", "--type", "text"], b"")?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading value"), "stderr: {stderr}");
    Ok(())
}
