// local imports
use crate::{error::Result, mode::Mode, path};

// ---

/// Matches the candidate against the pattern with its first balanced `{...}` group
/// replaced by each alternative in turn, left to right, stopping at the first match.
///
/// Only the first group is expanded, any later group is matched literally.
/// A pattern without a balanced group is matched as it is.
pub(crate) fn matches(pattern: &[u8], text: &[u8], mode: Mode) -> Result<bool> {
    let Some((open, close)) = find_group(pattern, mode.escape) else {
        return Ok(path::matches(pattern, text, mode));
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];

    // an alternative is never longer than the group it replaces
    let mut buf = Vec::new();
    buf.try_reserve_exact(pattern.len())?;

    for alternative in Alternatives::new(&pattern[open + 1..close], mode.escape) {
        buf.clear();
        buf.extend_from_slice(prefix);
        buf.extend_from_slice(alternative);
        buf.extend_from_slice(suffix);

        if path::matches(&buf, text, mode) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Finds the first balanced `{...}` group, returning positions of both braces.
fn find_group(pattern: &[u8], escape: bool) -> Option<(usize, usize)> {
    let mut open = None;
    let mut nest = 0usize;
    let mut i = 0;

    while i < pattern.len() {
        match pattern[i] {
            b'{' => {
                if nest == 0 {
                    open = Some(i);
                }
                nest += 1;
            }
            b'}' if nest != 0 => {
                nest -= 1;
                if nest == 0 {
                    return open.map(|open| (open, i));
                }
            }
            b'\\' if escape => i += 1,
            _ => {}
        }
        i += 1;
    }

    None
}

// ---

/// Iterates over comma-separated alternatives at the top nesting level of a group body.
///
/// Escape sequences are kept as they are.
struct Alternatives<'a> {
    rest: Option<&'a [u8]>,
    escape: bool,
}

impl<'a> Alternatives<'a> {
    fn new(body: &'a [u8], escape: bool) -> Self {
        Self {
            rest: Some(body),
            escape,
        }
    }
}

impl<'a> Iterator for Alternatives<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let mut nest = 0usize;
        let mut i = 0;

        while i < rest.len() {
            match rest[i] {
                b',' if nest == 0 => {
                    self.rest = Some(&rest[i + 1..]);
                    return Some(&rest[..i]);
                }
                b'{' => nest += 1,
                b'}' => nest = nest.saturating_sub(1),
                b'\\' if self.escape => i += 1,
                _ => {}
            }
            i += 1;
        }

        self.rest = None;
        Some(rest)
    }
}
