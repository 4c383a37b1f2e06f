//! Error and result types shared across the crate.

use thiserror::Error;

/// Errors produced while a stream transformer is running.
///
/// Argument-grammar violations are not in here; they are reported by
/// [`ValidateError`](crate::ValidateError) before any byte of the stream
/// is touched.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reversal met a byte that is neither a hex digit nor whitespace.
    /// Processing stops at the first such byte; there is no recovery.
    #[error("invalid character {byte:#04x} at input offset {offset}, expected a hex digit or whitespace")]
    InvalidHexByte {
        /// The offending byte value.
        byte: u8,
        /// Zero-based offset of the byte in the input stream.
        offset: u64,
    },

    /// The split word width lies outside the accepted open interval.
    #[error("word width {width} is out of range, expected 0 < width < {limit}", limit = crate::stream::split::WIDTH_LIMIT)]
    WidthOutOfRange {
        /// The rejected width.
        width: u64,
    },
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;
