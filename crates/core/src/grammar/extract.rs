//! Argument-to-parameter extraction: the second pass over an argument
//! vector, producing the action set and each action's typed parameter.

use super::{Action, ActionSet, classify};
use crate::scan;

/// Parameter state of one action after extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Param {
    /// No parameter was supplied (and none was owed).
    #[default]
    Absent,
    /// A numeral was supplied and parsed.
    Value(u64),
    /// The flag requires a parameter and none arrived.
    Missing,
    /// A numeral arrived for a flag that takes none.
    Unexpected,
}

impl Param {
    /// The parsed value, or `default` when the slot holds anything else.
    pub fn value_or(self, default: u64) -> u64 {
        match self {
            Param::Value(value) => value,
            _ => default,
        }
    }
}

/// Per-action parameter storage, keyed by [`Action`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamTable {
    slots: [Param; Action::COUNT],
}

impl ParamTable {
    /// The parameter recorded for `action`.
    pub fn get(&self, action: Action) -> Param {
        self.slots[action.index()]
    }

    fn set(&mut self, action: Action, param: Param) {
        self.slots[action.index()] = param;
    }
}

/// Result of [`extract`]: the requested actions and their parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Which flags appeared.
    pub actions: ActionSet,
    /// Parameter slot per action; untouched slots read [`Param::Absent`].
    pub params: ParamTable,
}

/// Extract the action set and parameters from `args`.
///
/// Assumes `args` already passed [`validate`](super::validate::validate);
/// on arguments that do not, the result is still well defined (every slot
/// holds one of the four tags, nothing panics) but callers get no promise
/// about which transformer it selects.
///
/// A flag that requires a parameter pre-sets its slot to
/// [`Param::Missing`] so an absent trailing numeral stays detectable; the
/// numeral, when it arrives, overwrites the slot. A numeral following a
/// parameterless flag records [`Param::Unexpected`]. Numerals never
/// chain: consuming one clears the previous-flag state, as does any
/// unrecognized token.
pub fn extract<S: AsRef<str>>(args: &[S]) -> Extraction {
    let mut out = Extraction::default();
    let mut previous: Option<Action> = None;

    for arg in args {
        let token = arg.as_ref();
        if let Some(action) = classify(token) {
            out.actions.insert(action);
            if action.requires_param() {
                out.params.set(action, Param::Missing);
            }
            previous = Some(action);
            continue;
        }
        if let Some(flag) = previous.take()
            && let Some(value) = scan::parse_decimal(token)
        {
            let param = if flag.accepts_param() {
                Param::Value(value)
            } else {
                Param::Unexpected
            };
            out.params.set(flag, param);
        }
    }

    out
}
