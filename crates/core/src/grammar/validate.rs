//! Argument validator: one left-to-right pass over the raw argument
//! vector, applying the grammar rules before any action runs.

use thiserror::Error;

use super::{Action, ActionSet, classify};
use crate::scan;

/// The closed set of grammar violations the validator can report.
///
/// Validation is fail-fast: the first violation ends the walk, so an
/// invocation produces at most one of these, and no stream byte is ever
/// consumed by an invalid invocation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    /// A token that is neither a known flag nor a numeral.
    #[error("unknown input in program arguments")]
    UnknownInput,
    /// A numeral with no preceding flag to attach to.
    #[error("unexpected parameter in program arguments")]
    UnexpectedParameter,
    /// A numeral following a flag that takes no parameter.
    #[error("flag does not expect a parameter")]
    FlagNotExpectingParameter,
    /// A flag that requires a parameter was not followed by a numeral.
    #[error("missing flag parameter")]
    MissingFlagParameter,
    /// The same flag appeared twice.
    #[error("flag duplication")]
    FlagDuplication,
}

/// Check `args` against the flag grammar.
///
/// Rules per token, checked in order:
/// 1. a known flag while no parameter is owed: reject a duplicate,
///    otherwise record it and note whether it owes a parameter;
/// 2. a numeral: consumed by an immediately preceding flag that accepts
///    a parameter, rejected otherwise;
/// 3. anything else while a parameter is owed: that parameter is missing;
/// 4. anything else: unknown input.
///
/// A parameter still owed when the vector ends is also missing. The
/// empty vector is valid and requests the default dump.
pub fn validate<S: AsRef<str>>(args: &[S]) -> Result<(), ValidateError> {
    let mut seen = ActionSet::EMPTY;
    let mut previous: Option<Action> = None;
    let mut owed = false;

    for arg in args {
        let token = arg.as_ref();
        match classify(token) {
            Some(action) if !owed => {
                if seen.contains(action) {
                    return Err(ValidateError::FlagDuplication);
                }
                seen.insert(action);
                previous = Some(action);
                owed = action.requires_param();
            }
            _ if scan::is_decimal(token) => match previous.take() {
                Some(flag) if flag.accepts_param() => owed = false,
                Some(_) => return Err(ValidateError::FlagNotExpectingParameter),
                None => return Err(ValidateError::UnexpectedParameter),
            },
            _ if owed => return Err(ValidateError::MissingFlagParameter),
            _ => return Err(ValidateError::UnknownInput),
        }
    }

    if owed {
        return Err(ValidateError::MissingFlagParameter);
    }
    Ok(())
}
