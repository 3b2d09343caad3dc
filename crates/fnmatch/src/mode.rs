// local imports
use crate::flags::{Flag, Flags};

// ---

/// Matching switches resolved from [`Flags`] once per top-level call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mode {
    pub escape: bool,
    pub pathname: bool,
    pub period: bool,
    pub nocase: bool,
}

impl Mode {
    pub fn new(flags: Flags) -> Self {
        Self {
            escape: !flags.contains(Flag::NoEscape),
            pathname: flags.contains(Flag::PathName),
            period: !flags.contains(Flag::DotMatch),
            nocase: flags.contains(Flag::CaseFold),
        }
    }

    /// Reports whether position `i` of `s` ends the current segment.
    #[inline]
    pub fn is_end(&self, s: &[u8], i: usize) -> bool {
        match s.get(i) {
            None => true,
            Some(b'/') => self.pathname,
            Some(_) => false,
        }
    }

    /// Skips an escape introducer at position `i` of the pattern.
    #[inline]
    pub fn unescape(&self, p: &[u8], i: usize) -> usize {
        if self.escape && p.get(i) == Some(&b'\\') { i + 1 } else { i }
    }

    /// Reports whether position `i` holds an escape introducer with nothing after it.
    #[inline]
    pub fn is_dangling(&self, p: &[u8], i: usize) -> bool {
        self.escape && i + 1 == p.len() && p[i] == b'\\'
    }

    #[inline]
    pub fn fold(&self, c: u8) -> u8 {
        if self.nocase { c.to_ascii_lowercase() } else { c }
    }
}

// ---

/// A pair of read positions in the pattern and in the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Cursor {
    pub pattern: usize,
    pub text: usize,
}

impl Cursor {
    #[inline]
    pub fn new(pattern: usize, text: usize) -> Self {
        Self { pattern, text }
    }
}
