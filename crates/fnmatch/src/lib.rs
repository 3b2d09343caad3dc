//! Shell-style glob matching.
//!
//! This crate decides whether a candidate string matches a glob pattern,
//! following the long-standing `fnmatch` rules with the usual GNU/Ruby extensions.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters (never `/` in pathname mode)
//! - `?` - Matches exactly one character
//! - `[...]` - Matches one character from a class, e.g. `[abc]`, `[a-z]`, `[!0-9]` or `[^0-9]`
//! - `\x` - Matches `x` literally, unless [`Flag::NoEscape`] is set
//! - `**/` - Matches zero or more whole path segments in pathname mode
//! - `{a,b,c}` - Matches any of the alternatives in extended glob mode
//!
//! # Examples
//!
//! ```
//! use fnmatch::{Flags, fnmatch, matches};
//!
//! assert!(fnmatch("*.txt", "notes.txt", Flags::empty()));
//! assert!(!fnmatch("*.txt", "docs/notes.txt", Flags::PATHNAME));
//! assert!(fnmatch("**/*.txt", "docs/notes.txt", Flags::PATHNAME));
//!
//! // Hidden files are not matched by wildcards unless requested
//! assert!(!fnmatch("*", ".profile", Flags::empty()));
//! assert!(fnmatch("*", ".profile", Flags::DOTMATCH));
//!
//! // Brace alternation is enabled by the extended glob flag
//! assert!(matches("{cat,dog}.txt", "dog.txt", Flags::EXTGLOB));
//! assert!(!matches("{cat,dog}.txt", "dog.txt", Flags::empty()));
//! ```
//!
//! # Byte Semantics
//!
//! Patterns and candidates are treated as raw bytes, so `?` and bracket
//! expressions consume a single byte, and case folding only affects ASCII letters.
//! Malformed patterns never produce errors, they simply do not match:
//!
//! ```
//! use fnmatch::{Flags, fnmatch};
//!
//! assert!(!fnmatch("[abc", "a", Flags::empty()));
//! ```

mod brace;
mod bracket;
mod error;
mod flags;
mod mode;
mod path;
mod segment;

pub use error::{Error, Result};
pub use flags::{Flag, Flags};

#[cfg(feature = "clap")]
pub use flags::ClapParser;

use mode::Mode;

/// Tests whether `candidate` matches `pattern` without brace expansion.
///
/// The [`Flag::ExtGlob`] flag has no effect here, use [`matches`] or
/// [`fnmatch_extended`] to get brace alternation.
///
/// # Examples
///
/// ```
/// use fnmatch::{Flags, fnmatch};
///
/// assert!(fnmatch("[a-c]", "b", Flags::empty()));
/// assert!(fnmatch("ABC", "abc", Flags::CASEFOLD));
/// assert!(!fnmatch("ABC", "abc", Flags::empty()));
/// ```
pub fn fnmatch(pattern: impl AsRef<[u8]>, candidate: impl AsRef<[u8]>, flags: Flags) -> bool {
    path::matches(pattern.as_ref(), candidate.as_ref(), Mode::new(flags))
}

/// Tests whether `candidate` matches `pattern`, expanding `{...}` alternatives first.
///
/// A failure to allocate the rewrite buffer is reported as a mismatch,
/// use [`try_fnmatch_extended`] to tell it apart.
///
/// # Examples
///
/// ```
/// use fnmatch::{Flags, fnmatch_extended};
///
/// assert!(fnmatch_extended("{a,ab}c", "abc", Flags::EXTGLOB));
/// assert!(fnmatch_extended("src/{lib,main}.rs", "src/main.rs", Flags::PATHNAME));
/// ```
pub fn fnmatch_extended(pattern: impl AsRef<[u8]>, candidate: impl AsRef<[u8]>, flags: Flags) -> bool {
    try_fnmatch_extended(pattern, candidate, flags).unwrap_or(false)
}

/// Tests whether `candidate` matches `pattern`, expanding `{...}` alternatives first.
///
/// Only the first balanced group is expanded. Returns an error only if the
/// rewrite buffer cannot be allocated.
///
/// # Examples
///
/// ```
/// use fnmatch::{Flags, try_fnmatch_extended};
///
/// assert_eq!(try_fnmatch_extended("{x,y}", "y", Flags::EXTGLOB), Ok(true));
/// assert_eq!(try_fnmatch_extended("{x,y}{z,w}", "yw", Flags::EXTGLOB), Ok(false));
/// assert_eq!(try_fnmatch_extended("{x,y}{z,w}", "y{z,w}", Flags::EXTGLOB), Ok(true));
/// ```
pub fn try_fnmatch_extended(pattern: impl AsRef<[u8]>, candidate: impl AsRef<[u8]>, flags: Flags) -> Result<bool> {
    brace::matches(pattern.as_ref(), candidate.as_ref(), Mode::new(flags))
}

/// Tests whether `candidate` matches `pattern`, choosing the entry point by flags.
///
/// With [`Flag::ExtGlob`] set this is [`fnmatch_extended`], otherwise [`fnmatch`].
#[inline]
pub fn matches(pattern: impl AsRef<[u8]>, candidate: impl AsRef<[u8]>, flags: Flags) -> bool {
    if flags.contains(Flag::ExtGlob) {
        fnmatch_extended(pattern, candidate, flags)
    } else {
        fnmatch(pattern, candidate, flags)
    }
}

#[cfg(test)]
mod tests;
