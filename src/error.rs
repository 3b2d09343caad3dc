// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to match pattern {pattern:?}: {source}")]
    Match {
        pattern: String,
        #[source]
        source: fnmatch::Error,
    },
}

impl Error {
    /// Writes the error to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
