//! Fixed-width word wrapping.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::scan;

/// Exclusive upper bound for the word width.
pub const WIDTH_LIMIT: u64 = 200;

/// True when `width` lies in the accepted open interval (0, 200).
pub fn width_in_bounds(width: u64) -> bool {
    width > 0 && width < WIDTH_LIMIT
}

/// Re-wrap the input into words at least `width` characters wide.
///
/// Word bytes (the printable range plus tab) accumulate in a buffer of
/// exactly `width` bytes. The buffer is flushed by the arrival of the
/// next byte once full, so a word never reaches the output before it is
/// known to fill the width: shorter words are dropped entirely, as is a
/// word of exactly `width` bytes that ends the stream. Overflow bytes
/// stream straight through behind the flushed buffer. A delimiter byte
/// closes a word that reached the width with a newline and resets the
/// count; short words are discarded silently.
///
/// An out-of-range `width` returns [`Error::WidthOutOfRange`] before
/// touching the input.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W, width: u64) -> Result<()> {
    if !width_in_bounds(width) {
        return Err(Error::WidthOutOfRange { width });
    }
    let width = width as usize;
    let mut word = vec![0u8; width];
    let mut seen = 0usize;

    super::for_each_byte(&mut input, |byte| {
        if seen == width {
            output.write_all(&word)?;
        }
        if scan::is_word_byte(byte) {
            if seen < width {
                word[seen] = byte;
            } else {
                output.write_all(&[byte])?;
            }
            seen += 1;
        } else {
            if seen >= width {
                output.write_all(b"\n")?;
            }
            seen = 0;
        }
        Ok(())
    })
}
