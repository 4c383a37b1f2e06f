//! Single-pass stream transformers.
//!
//! Each transformer consumes a [`std::io::Read`] exactly once and writes
//! to a [`std::io::Write`], never looking ahead beyond its own small
//! buffer: the dump's 16-byte line, the reversal's digit pair, the
//! split's word buffer.

/// Canonical address + hex + ASCII dump.
pub mod dump;
/// Packed lowercase hex.
pub mod rawhex;
/// Hex text back into raw bytes.
pub mod reverse;
/// Fixed-width word wrapping.
pub mod split;

use std::io::{ErrorKind, Read};

use crate::error::Result;

/// Scratch-buffer size for the chunked readers.
const CHUNK: usize = 4096;

/// Read until `buf` is full or the stream ends; returns the bytes read.
///
/// Retries on [`ErrorKind::Interrupted`], so a short return always means
/// end of stream.
fn read_up_to<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Drive `apply` over every input byte, reading in chunks but delivering
/// bytes one at a time, in order. Bytes are handed over as they arrive,
/// so a transformer keeps pace with a slow producer.
fn for_each_byte<R, F>(input: &mut R, mut apply: F) -> Result<()>
where
    R: Read,
    F: FnMut(u8) -> Result<()>,
{
    let mut chunk = [0u8; CHUNK];
    loop {
        match input.read(&mut chunk) {
            Ok(0) => return Ok(()),
            Ok(n) => {
                for &byte in &chunk[..n] {
                    apply(byte)?;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
}
