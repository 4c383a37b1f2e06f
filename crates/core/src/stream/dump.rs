//! Canonical dump: 8-digit address, 16 hex bytes, ASCII gutter.

use std::io::{Read, Write};

use super::read_up_to;
use crate::error::Result;
use crate::scan;

/// Bytes rendered per output line.
const LINE_BYTES: usize = 16;

/// Run the canonical dump.
///
/// Discards `skip` bytes first; reaching end of stream during the skip is
/// silent success. Then renders up to `count` bytes (`None` is
/// unbounded), 16 per line. Each line carries the stream offset of its
/// first byte as an 8-digit lowercase hex address, the bytes as
/// two-digit hex with an extra space before the 9th column, and a
/// 16-character ASCII gutter between `|` bars; a short final line pads so
/// the gutter column stays aligned. Empty input produces no lines. A
/// `count` of zero returns before the skip phase, reading nothing at all.
pub fn run<R, W>(mut input: R, mut output: W, skip: u64, count: Option<u64>) -> Result<()>
where
    R: Read,
    W: Write,
{
    if count == Some(0) {
        return Ok(());
    }
    if discard(&mut input, skip)? < skip {
        return Ok(());
    }

    let mut address = skip;
    let mut remaining = count;
    let mut line = [0u8; LINE_BYTES];
    loop {
        let want = match remaining {
            Some(0) => break,
            Some(n) => n.min(LINE_BYTES as u64) as usize,
            None => LINE_BYTES,
        };
        let got = read_up_to(&mut input, &mut line[..want])?;
        if got == 0 {
            break;
        }
        write_line(&mut output, address, &line[..got])?;
        address += got as u64;
        if let Some(n) = remaining.as_mut() {
            *n -= got as u64;
        }
        if got < want {
            break;
        }
    }
    Ok(())
}

/// Discard up to `limit` bytes; returns how many were actually read.
fn discard<R: Read>(input: &mut R, limit: u64) -> Result<u64> {
    let mut scratch = [0u8; super::CHUNK];
    let mut seen = 0u64;
    while seen < limit {
        let want = (limit - seen).min(scratch.len() as u64) as usize;
        let got = read_up_to(input, &mut scratch[..want])?;
        seen += got as u64;
        if got < want {
            break;
        }
    }
    Ok(seen)
}

/// Render one line: address, 16 hex columns, ASCII gutter.
///
/// Empty columns pad with spaces so the gutter bars sit in the same
/// place on every line.
fn write_line<W: Write>(output: &mut W, address: u64, bytes: &[u8]) -> Result<()> {
    write!(output, "{address:08x}  ")?;
    for column in 0..LINE_BYTES {
        if column == LINE_BYTES / 2 {
            write!(output, " ")?;
        }
        match bytes.get(column) {
            Some(byte) => write!(output, "{byte:02x} ")?,
            None => write!(output, "   ")?,
        }
    }
    write!(output, " |")?;
    for &byte in bytes {
        let shown = if scan::is_printable(byte) { byte as char } else { '.' };
        write!(output, "{shown}")?;
    }
    for _ in bytes.len()..LINE_BYTES {
        write!(output, " ")?;
    }
    writeln!(output, "|")?;
    Ok(())
}
