//! Decimal scanning and byte classification helpers.
//!
//! The grammar and the transformers branch on a handful of byte classes
//! that the stock predicates do not match exactly: `str::parse::<u64>`
//! accepts a leading `+`, which the numeral grammar must reject, and
//! `u8::is_ascii_whitespace` misses vertical tab, which the reversal
//! transformer must skip.

/// True if `token` is a valid unsigned-decimal numeral: one or more ASCII
/// digits and nothing else. Signs are not part of the grammar, so `+3`
/// and `-1` are not numerals.
pub fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an unsigned-decimal numeral, saturating at `u64::MAX`.
///
/// Returns `None` for anything [`is_decimal`] rejects. Saturation keeps
/// arbitrarily long digit strings numeric: for skip and count a saturated
/// value already means "the rest of the stream", and the split width
/// check rejects anything near that large.
pub fn parse_decimal(token: &str) -> Option<u64> {
    if !is_decimal(token) {
        return None;
    }
    let mut value: u64 = 0;
    for b in token.bytes() {
        value = value.saturating_mul(10).saturating_add(u64::from(b - b'0'));
    }
    Some(value)
}

/// True for bytes rendered as themselves in the dump's ASCII gutter:
/// space through `~` (0x20..=0x7e). Everything else renders as `.`.
pub fn is_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7e)
}

/// True for bytes the split transformer treats as part of a word: the
/// printable range plus horizontal tab. Every other byte, including all
/// bytes above 0x7e, delimits a word.
pub fn is_word_byte(b: u8) -> bool {
    is_printable(b) || b == b'\t'
}

/// True for the whitespace bytes the reversal transformer skips: space,
/// horizontal tab, newline, vertical tab, form feed, carriage return.
pub fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}
