//! Field parsing for triplet lines
//!
//! Integer fields are parsed by hand so that signs, decimal points and
//! overflow are all rejected the same way.

use core::str::SplitAsciiWhitespace;

/// Parse a non-negative decimal integer
///
/// Returns `None` for empty input, any non-digit byte (including a sign)
/// and values that overflow `usize`.
pub fn parse_usize(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = (byte - b'0') as usize;
        result = result.checked_mul(10)?.checked_add(digit)?;
    }

    Some(result)
}

/// Whitespace-separated fields of one line
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Fields<'a> {
    /// Split a line on ASCII whitespace
    pub fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_ascii_whitespace(),
        }
    }

    /// True when no fields remain
    pub fn is_exhausted(&self) -> bool {
        self.inner.clone().next().is_none()
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }
}

/// True for lines holding only whitespace
pub fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_whitespace())
}
