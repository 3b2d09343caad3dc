// local imports
use crate::mode::Mode;

// ---

/// Matches a single candidate byte against a bracket expression.
///
/// `p` points just past the opening `[`. On success returns the position just past
/// the closing `]`. Returns `None` if the byte is rejected or if the expression
/// is not terminated.
pub(crate) fn matches(pattern: &[u8], mut p: usize, c: u8, mode: Mode) -> Option<usize> {
    let c = mode.fold(c);

    let negated = matches!(pattern.get(p), Some(b'!' | b'^'));
    if negated {
        p += 1;
    }

    let mut accepted = false;

    while *pattern.get(p)? != b']' {
        let lo = mode.unescape(pattern, p);
        let first = mode.fold(*pattern.get(lo)?);
        p = lo + 1;

        // `x-]` is a literal `x` followed by a literal `-`
        if pattern.get(p) == Some(&b'-') && pattern.get(p + 1) != Some(&b']') {
            let hi = mode.unescape(pattern, p + 1);
            let last = mode.fold(*pattern.get(hi)?);
            p = hi + 1;
            accepted = accepted || (first <= c && c <= last);
        } else {
            accepted = accepted || first == c;
        }
    }

    (accepted != negated).then_some(p + 1)
}
