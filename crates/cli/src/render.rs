//! Diagnostic and usage rendering.
//!
//! Everything here writes to stderr so that transformer output on stdout
//! stays clean. Tags are coloured with ariadne's [`Fmt`] helpers when
//! stderr is an interactive terminal and left plain when it is piped.

use std::io::{self, IsTerminal};

use ariadne::{Color, Fmt};
use hexcat_core::{Error, UnsupportedCombination, ValidateError};

// ── Diagnostics ─────────────────────────────────────────────────────────

/// Report an argument-grammar violation.
pub(crate) fn grammar_error(err: ValidateError) {
    report(&err.to_string());
}

/// Report a flag combination no transformer accepts.
pub(crate) fn combination_error(err: UnsupportedCombination) {
    report(&err.to_string());
}

/// Report a data fault that stopped a transformer mid-stream.
pub(crate) fn stream_fault(err: &Error) {
    report(&err.to_string());
}

/// Note an I/O error that ended the run early.
pub(crate) fn io_note(err: &io::Error) {
    eprintln!("{}: {err}", tag("warning", Color::Yellow));
}

fn report(message: &str) {
    eprintln!("{}: {message}", tag("error", Color::Red));
}

/// Colour `label` when stderr is a terminal, leave it plain otherwise.
fn tag(label: &str, color: Color) -> String {
    if io::stderr().is_terminal() {
        format!("{}", label.fg(color))
    } else {
        label.to_string()
    }
}

// ── Usage ───────────────────────────────────────────────────────────────

/// Print the usage summary: the accepted flag combinations and what each
/// flag does.
pub(crate) fn usage() {
    eprintln!("usage: hexcat [-s N] [-n N] | -x | -S N | -r");
    eprintln!("  -s N   skip the first N input bytes before dumping");
    eprintln!("  -n N   dump at most N input bytes");
    eprintln!("  -x     print the input as packed lowercase hex");
    eprintln!("  -S N   re-wrap input words to width N (0 < N < 200)");
    eprintln!("  -r     turn hex text back into the bytes it spells");
}
