// third-party imports
use memchr::memchr;

// local imports
use crate::{
    mode::{Cursor, Mode},
    segment,
};

// ---

const DESCENT: &[u8] = b"**/";

/// Matches the whole pattern against the whole candidate.
///
/// In pathname mode the inputs are matched segment by segment, and a `**/` prefix
/// of a pattern segment may absorb any number of whole candidate segments.
pub(crate) fn matches(pattern: &[u8], text: &[u8], mode: Mode) -> bool {
    if !mode.pathname {
        return segment::matches(pattern, text, &mut Cursor::default(), mode);
    }

    let mut cursor = Cursor::default();
    let mut descent: Option<Cursor> = None;

    loop {
        if pattern[cursor.pattern..].starts_with(DESCENT) {
            while pattern[cursor.pattern..].starts_with(DESCENT) {
                cursor.pattern += DESCENT.len();
            }
            descent = Some(cursor);
        }

        if segment::matches(pattern, text, &mut cursor, mode) {
            cursor.text = segment_end(text, cursor.text);
            let more_pattern = cursor.pattern < pattern.len();
            let more_text = cursor.text < text.len();
            if more_pattern && more_text {
                cursor.pattern += 1;
                cursor.text += 1;
                continue;
            }
            if !more_pattern && !more_text {
                return true;
            }
        }

        // let the last `**/` swallow one more segment
        match descent.as_mut() {
            Some(retry) if !(mode.period && text.get(retry.text) == Some(&b'.')) => {
                let Some(offset) = memchr(b'/', &text[retry.text..]) else {
                    return false;
                };
                retry.text += offset + 1;
                cursor = *retry;
            }
            _ => return false,
        }
    }
}

#[inline]
fn segment_end(text: &[u8], from: usize) -> usize {
    memchr(b'/', &text[from..]).map_or(text.len(), |offset| from + offset)
}
