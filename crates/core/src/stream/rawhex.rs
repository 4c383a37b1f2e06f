//! Packed hex: every input byte as two lowercase digits.

use std::io::{Read, Write};

use crate::error::Result;

/// Emit every input byte as its two-digit lowercase hex value, no
/// separators, then a single newline. The newline comes even for empty
/// input, so the output is always exactly twice the input length plus
/// one.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    super::for_each_byte(&mut input, |byte| {
        write!(output, "{byte:02x}")?;
        Ok(())
    })?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn hex_string(input: &[u8]) -> String {
        let mut out = Vec::new();
        run(Cursor::new(input.to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bytes_become_two_lowercase_digits() {
        assert_eq!(hex_string(b"Hello"), "48656c6c6f\n");
        assert_eq!(hex_string(&[0x00, 0x0f, 0xff]), "000fff\n");
    }

    #[test]
    fn empty_input_still_gets_the_newline() {
        assert_eq!(hex_string(b""), "\n");
    }

    #[test]
    fn output_length_is_twice_input_plus_newline() {
        for len in [0usize, 1, 15, 16, 17, 100] {
            let input = vec![0xabu8; len];
            assert_eq!(hex_string(&input).len(), len * 2 + 1, "len {len}");
        }
    }
}
