// local imports
use crate::{
    bracket,
    mode::{Cursor, Mode},
};

// ---

/// Matches one segment of the pattern against one segment of the candidate.
///
/// In pathname mode a segment ends at `/`, otherwise at the end of the input.
/// On return `cursor` holds the positions reached in both inputs. After a successful
/// match the pattern position is at the end of its segment, while the candidate
/// position may still be inside its segment if the pattern ended with `*`.
///
/// Only the most recent `*` is retried on a mismatch.
pub(crate) fn matches(pattern: &[u8], text: &[u8], cursor: &mut Cursor, mode: Mode) -> bool {
    let Cursor { pattern: mut p, text: mut s } = *cursor;

    let matched = 'scan: {
        if mode.period && text.get(s) == Some(&b'.') && pattern.get(mode.unescape(pattern, p)) != Some(&b'.') {
            break 'scan false;
        }

        let mut star: Option<Cursor> = None;

        loop {
            match pattern.get(p) {
                Some(b'*') => {
                    while pattern.get(p) == Some(&b'*') {
                        p += 1;
                    }
                    if mode.is_dangling(pattern, p) {
                        break 'scan false;
                    }
                    let next = mode.unescape(pattern, p);
                    if mode.is_end(pattern, next) {
                        p = next;
                        break 'scan true;
                    }
                    if mode.is_end(text, s) {
                        break 'scan false;
                    }
                    star = Some(Cursor::new(p, s));
                    continue;
                }
                Some(b'?') => {
                    if mode.is_end(text, s) {
                        break 'scan false;
                    }
                    p += 1;
                    s += 1;
                    continue;
                }
                Some(b'[') => {
                    if mode.is_end(text, s) {
                        break 'scan false;
                    }
                    if let Some(next) = bracket::matches(pattern, p + 1, text[s], mode) {
                        p = next;
                        s += 1;
                        continue;
                    }
                }
                _ => {
                    if mode.is_dangling(pattern, p) {
                        break 'scan false;
                    }
                    p = mode.unescape(pattern, p);
                    if mode.is_end(text, s) {
                        break 'scan mode.is_end(pattern, p);
                    }
                    if !mode.is_end(pattern, p) && mode.fold(pattern[p]) == mode.fold(text[s]) {
                        p += 1;
                        s += 1;
                        continue;
                    }
                }
            }

            // mismatch, let the last `*` swallow one more byte
            match star.as_mut() {
                Some(retry) => {
                    retry.text += 1;
                    p = retry.pattern;
                    s = retry.text;
                }
                None => break 'scan false,
            }
        }
    };

    *cursor = Cursor::new(p, s);
    matched
}
