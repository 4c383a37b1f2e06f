//! End-to-end tests driving each transformer through the binary with
//! piped stdin, checking stdout bytes and the exit-status policy.

use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

use assert_cmd::cargo;

fn hexcat_cmd() -> Command {
    Command::new(cargo::cargo_bin!("hexcat"))
}

fn run_with_stdin(args: &[&str], stdin_body: &[u8]) -> Output {
    let mut child = hexcat_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hexcat");

    {
        let stdin = child.stdin.as_mut().expect("stdin handle");
        // A count of zero exits without reading stdin, which can close
        // the pipe before this write lands.
        if let Err(err) = stdin.write_all(stdin_body) {
            assert_eq!(err.kind(), ErrorKind::BrokenPipe, "write stdin body: {err}");
        }
    }

    child.wait_with_output().expect("wait for output")
}

// ── dump ────────────────────────────────────────────────────────────────

#[test]
fn bare_invocation_dumps_with_aligned_gutter() {
    let output = run_with_stdin(&[], b"hello");
    assert!(
        output.status.success(),
        "dump should succeed, stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let expected = format!(
        "00000000  68 65 6c 6c 6f{}|hello{}|\n",
        " ".repeat(36),
        " ".repeat(11)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn empty_stdin_dumps_nothing() {
    let output = run_with_stdin(&[], b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn skip_and_count_select_a_window() {
    let output = run_with_stdin(&["-s", "4", "-n", "4"], b"0123456789");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_eq!(stdout.lines().count(), 1, "got {stdout:?}");
    assert!(stdout.starts_with("00000004  34 35 36 37 "), "got {stdout:?}");
    assert!(stdout.contains("|4567"), "got {stdout:?}");
}

#[test]
fn count_zero_produces_nothing() {
    let output = run_with_stdin(&["-n", "0"], b"abcdef");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn flag_order_does_not_matter_for_the_dump() {
    let forward = run_with_stdin(&["-s", "2", "-n", "3"], b"0123456789");
    let reversed = run_with_stdin(&["-n", "3", "-s", "2"], b"0123456789");
    assert_eq!(forward.stdout, reversed.stdout);
}

// ── raw hex ─────────────────────────────────────────────────────────────

#[test]
fn rawhex_streams_packed_lowercase_digits() {
    let output = run_with_stdin(&["-x"], &[0x00, 0xde, 0xad, 0xff]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"00deadff\n");
}

#[test]
fn rawhex_of_empty_input_is_a_bare_newline() {
    let output = run_with_stdin(&["-x"], b"");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"\n");
}

// ── reversal ────────────────────────────────────────────────────────────

#[test]
fn reversal_rebuilds_bytes_from_spaced_hex() {
    let output = run_with_stdin(&["-r"], b"48 65 6c 6c 6f\n");
    assert!(
        output.status.success(),
        "reversal should succeed, stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(output.stdout, b"Hello");
    assert!(output.stderr.is_empty());
}

#[test]
fn reversal_undoes_rawhex() {
    let payload: Vec<u8> = (0u8..=255).collect();
    let encoded = run_with_stdin(&["-x"], &payload);
    assert!(encoded.status.success());
    let decoded = run_with_stdin(&["-r"], &encoded.stdout);
    assert!(decoded.status.success());
    assert_eq!(decoded.stdout, payload);
}

#[test]
fn reversal_fault_is_the_only_nonzero_exit() {
    let output = run_with_stdin(&["-r"], b"48zz");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid character") && stderr.contains("offset 2"),
        "got {stderr:?}"
    );
    assert_eq!(output.stdout, b"H", "bytes before the fault still flush");
}

// ── split ───────────────────────────────────────────────────────────────

#[test]
fn split_keeps_words_already_at_width() {
    let output = run_with_stdin(&["-S", "4"], b"hello world\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"hello world\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn split_drops_words_shorter_than_width() {
    let output = run_with_stdin(&["-S", "3"], b"ab\ncdef\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"cdef\n");
}
