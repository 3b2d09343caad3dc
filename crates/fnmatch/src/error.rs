// std imports
use std::collections::TryReserveError;

// third-party imports
use thiserror::Error;

/// Error is an error which may occur while matching with brace expansion or while parsing flags.
///
/// Malformed patterns are never reported as errors, they simply do not match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to allocate brace expansion buffer: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("unknown flag {0:?}, use any of noescape, pathname, dotmatch, casefold, extglob or a numeric bitmask")]
    UnknownFlag(String),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
