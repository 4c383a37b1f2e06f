//! Flag grammar shared by the validator and extractor.
//!
//! A fixed, order-significant table of five flags. The table index of a
//! flag doubles as the bit position of its action in an [`ActionSet`],
//! and the declaration order of [`Action`] mirrors the table.

/// The extractor: second pass producing the action set and parameters.
pub mod extract;
/// The validator: single-pass grammar check over the argument vector.
pub mod validate;

use std::fmt;

/// One of the five operating modes a flag can request.
///
/// Declaration order matters: an action's bit in an [`ActionSet`] is
/// `1 << (its index here)`, matching its row in [`FLAGS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// `-s N`: discard N input bytes before the canonical dump.
    Skip,
    /// `-n N`: stop the canonical dump after N input bytes.
    Count,
    /// `-x`: emit the whole input as packed lowercase hex.
    RawHex,
    /// `-S N`: re-wrap the input into words of width N.
    Split,
    /// `-r`: turn hex text back into raw bytes.
    Reverse,
}

impl Action {
    /// Number of recognized actions.
    pub const COUNT: usize = 5;

    /// Every action, in table order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::Skip,
        Action::Count,
        Action::RawHex,
        Action::Split,
        Action::Reverse,
    ];

    /// Table index of this action; also its bit position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The grammar row for this action.
    pub fn spec(self) -> &'static FlagSpec {
        &FLAGS[self.index()]
    }

    /// The argument token that requests this action, e.g. `-s`.
    pub fn token(self) -> &'static str {
        self.spec().token
    }

    /// Whether a numeral following the flag is consumed as its parameter.
    pub fn accepts_param(self) -> bool {
        self.spec().accepts_param
    }

    /// Whether the parameter is mandatory.
    pub fn requires_param(self) -> bool {
        self.spec().requires_param
    }
}

/// One row of the flag table.
#[derive(Debug)]
pub struct FlagSpec {
    /// The exact argument token, dash included.
    pub token: &'static str,
    /// Whether a following numeral is consumed as this flag's parameter.
    pub accepts_param: bool,
    /// Whether the parameter is mandatory.
    pub requires_param: bool,
}

/// The flag table. Order-significant: a row's index is its action's bit
/// position, so rows line up with [`Action::ALL`].
pub const FLAGS: [FlagSpec; Action::COUNT] = [
    FlagSpec { token: "-s", accepts_param: true, requires_param: true },
    FlagSpec { token: "-n", accepts_param: true, requires_param: true },
    FlagSpec { token: "-x", accepts_param: false, requires_param: false },
    FlagSpec { token: "-S", accepts_param: true, requires_param: true },
    FlagSpec { token: "-r", accepts_param: false, requires_param: false },
];

/// Classify `token` against the flag table.
///
/// Only an exact match counts: `-n` classifies, `-n6` does not (a
/// parameter is always its own freestanding token).
pub fn classify(token: &str) -> Option<Action> {
    FLAGS
        .iter()
        .position(|flag| flag.token == token)
        .map(|index| Action::ALL[index])
}

/// Set of requested actions, one bit per flag-table row.
///
/// A set bit means the flag appeared exactly once in the arguments; the
/// validator rejects duplicates instead of merging them.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    /// The empty set.
    pub const EMPTY: ActionSet = ActionSet(0);

    /// Set containing exactly `action`.
    pub fn single(action: Action) -> ActionSet {
        ActionSet(1 << action.index())
    }

    /// Set containing every action in `actions`.
    pub fn of(actions: &[Action]) -> ActionSet {
        let mut set = ActionSet::EMPTY;
        for &action in actions {
            set.insert(action);
        }
        set
    }

    /// Add `action` to the set.
    pub fn insert(&mut self, action: Action) {
        self.0 |= 1 << action.index();
    }

    /// Whether `action` is in the set.
    pub fn contains(self, action: Action) -> bool {
        self.0 & (1 << action.index()) != 0
    }

    /// Whether no action is in the set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every action in this set is also in `other`.
    pub fn is_subset(self, other: ActionSet) -> bool {
        self.0 & !other.0 == 0
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for action in Action::ALL {
            if self.contains(action) {
                set.entry(&action);
            }
        }
        set.finish()
    }
}
