//! Hex reversal: hex text back into the bytes it spells.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::scan;

/// Convert hex text from `input` back into raw bytes.
///
/// Digits pair up in arrival order, most significant first; whitespace
/// (vertical tab included) is skipped and never breaks a pair. Any other
/// byte is a data fault, reported with its stream offset after whatever
/// complete bytes were already written. A lone trailing digit at end of
/// stream is emitted as if left-padded with `0`.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut pending: Option<u8> = None;
    let mut offset: u64 = 0;

    super::for_each_byte(&mut input, |byte| {
        let at = offset;
        offset += 1;
        if byte.is_ascii_hexdigit() {
            if let Some(high) = pending.take() {
                output.write_all(&[hex_pair_to_byte(high, byte)])?;
            } else {
                pending = Some(byte);
            }
            Ok(())
        } else if scan::is_space(byte) {
            Ok(())
        } else {
            Err(Error::InvalidHexByte { byte, offset: at })
        }
    })?;

    if let Some(digit) = pending {
        output.write_all(&[hex_digit_value(digit)])?;
    }
    Ok(())
}

/// Numeric value of one ASCII hex digit.
fn hex_digit_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => unreachable!("caller checks is_ascii_hexdigit"),
    }
}

/// Combine two hex digits into the byte they spell.
fn hex_pair_to_byte(high: u8, low: u8) -> u8 {
    (hex_digit_value(high) << 4) | hex_digit_value(low)
}
