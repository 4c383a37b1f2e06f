//! Dispatch resolution: from an extracted action set and parameter table
//! to the one transformer run they request.

use thiserror::Error;

use crate::grammar::extract::Extraction;
use crate::grammar::{Action, ActionSet};

/// A fully resolved transformer run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Canonical dump: discard `skip` bytes, then dump up to `count`
    /// bytes, 16 per line with address and ASCII gutter.
    Dump {
        /// Bytes to discard before the first output line.
        skip: u64,
        /// Byte budget for the dump; `None` is unbounded.
        count: Option<u64>,
    },
    /// Packed lowercase hex of the whole input.
    RawHex,
    /// Hex text converted back into raw bytes.
    Reverse,
    /// Fixed-width word wrapping.
    Split {
        /// Requested word width; range-checked by the transformer.
        width: u64,
    },
}

/// The action set asks for more than one transformer, or combines a dump
/// modifier with an exclusive action.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("this combination of flags is not supported")]
pub struct UnsupportedCombination;

/// Select the transformer an extraction requests.
///
/// The dump fires for any subset of skip and count, including the empty
/// set; raw hex, split, and reverse must appear alone. Skip defaults to
/// zero. Count tracks its bit, not its slot: present-but-zero dumps
/// nothing, absent is unbounded.
pub fn resolve(extraction: &Extraction) -> Result<Request, UnsupportedCombination> {
    let Extraction { actions, params } = extraction;

    if actions.is_subset(ActionSet::of(&[Action::Skip, Action::Count])) {
        return Ok(Request::Dump {
            skip: params.get(Action::Skip).value_or(0),
            count: actions
                .contains(Action::Count)
                .then(|| params.get(Action::Count).value_or(0)),
        });
    }
    if *actions == ActionSet::single(Action::Reverse) {
        return Ok(Request::Reverse);
    }
    if *actions == ActionSet::single(Action::Split) {
        return Ok(Request::Split {
            width: params.get(Action::Split).value_or(0),
        });
    }
    if *actions == ActionSet::single(Action::RawHex) {
        return Ok(Request::RawHex);
    }
    Err(UnsupportedCombination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::extract::extract;

    fn resolve_args(args: &[&str]) -> Result<Request, UnsupportedCombination> {
        resolve(&extract(args))
    }

    // ── dump family ─────────────────────────────────────────────────────

    #[test]
    fn no_flags_resolve_to_unbounded_dump() {
        assert_eq!(resolve_args(&[]), Ok(Request::Dump { skip: 0, count: None }));
    }

    #[test]
    fn skip_and_count_fill_the_dump_request() {
        assert_eq!(
            resolve_args(&["-s", "4"]),
            Ok(Request::Dump { skip: 4, count: None })
        );
        assert_eq!(
            resolve_args(&["-n", "9"]),
            Ok(Request::Dump { skip: 0, count: Some(9) })
        );
        assert_eq!(
            resolve_args(&["-s", "4", "-n", "9"]),
            Ok(Request::Dump { skip: 4, count: Some(9) })
        );
    }

    #[test]
    fn count_zero_stays_zero_when_its_bit_is_set() {
        assert_eq!(
            resolve_args(&["-n", "0"]),
            Ok(Request::Dump { skip: 0, count: Some(0) })
        );
    }

    // ── exclusive actions ───────────────────────────────────────────────

    #[test]
    fn exclusive_flags_resolve_alone() {
        assert_eq!(resolve_args(&["-r"]), Ok(Request::Reverse));
        assert_eq!(resolve_args(&["-x"]), Ok(Request::RawHex));
        assert_eq!(resolve_args(&["-S", "40"]), Ok(Request::Split { width: 40 }));
    }

    #[test]
    fn split_width_comes_from_its_slot() {
        assert_eq!(resolve_args(&["-S", "0"]), Ok(Request::Split { width: 0 }));
        assert_eq!(
            resolve_args(&["-S", "199"]),
            Ok(Request::Split { width: 199 })
        );
    }

    // ── unsupported combinations ────────────────────────────────────────

    #[test]
    fn mixed_exclusive_actions_are_unsupported() {
        assert_eq!(resolve_args(&["-x", "-r"]), Err(UnsupportedCombination));
        assert_eq!(
            resolve_args(&["-S", "4", "-x"]),
            Err(UnsupportedCombination)
        );
    }

    #[test]
    fn dump_modifiers_do_not_combine_with_exclusive_actions() {
        assert_eq!(
            resolve_args(&["-s", "1", "-r"]),
            Err(UnsupportedCombination)
        );
        assert_eq!(
            resolve_args(&["-n", "2", "-x"]),
            Err(UnsupportedCombination)
        );
        assert_eq!(
            resolve_args(&["-s", "1", "-S", "4"]),
            Err(UnsupportedCombination)
        );
    }
}
