//! hexcat core library.
//!
//! Provides the flag grammar, argument validation and extraction, and the
//! four stream transformers of the hexcat byte-stream transcoder. The main
//! entry points are [`validate`] and [`extract`] for checking an argument
//! vector and turning it into an [`ActionSet`] with typed parameters,
//! [`resolve`] for selecting the transformer that set requests, and the
//! [`stream`] module for running it over an input stream.

#![warn(missing_docs)]

/// Crate-wide error and result types.
pub mod error;
/// Flag grammar: action table, token classification, validation, extraction.
pub mod grammar;
/// Dispatch resolution from an action set to a runnable request.
pub mod request;
/// Decimal scanning and byte classification helpers.
pub mod scan;
/// The four single-pass stream transformers.
pub mod stream;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Errors
pub use error::{Error, Result};

// Grammar
pub use grammar::{Action, ActionSet, FlagSpec, classify};

// Validator
pub use grammar::validate::{ValidateError, validate};

// Extractor
pub use grammar::extract::{Extraction, Param, ParamTable, extract};

// Dispatch
pub use request::{Request, UnsupportedCombination, resolve};
