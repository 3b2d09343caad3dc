// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use fnmatch::Flags;
use serde::{Deserialize, Serialize};

// local imports
use crate::error::Result;

// ---

pub static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub delimiter: Delimiter,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given sources in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(SourceFile { filename, required }) => {
                    log::debug!("added configuration file {} (required={})", filename.display(), required);
                    builder.add_source(File::from(filename.as_path()).required(required))
                }
                Source::String(value, format) => builder.add_source(File::from_str(&value, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

/// A configuration layer applied on top of the embedded defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(SourceFile),
    /// Inline configuration text, for callers embedding `fnm` that keep settings outside of files.
    String(String, FileFormat),
}

impl Source {
    pub fn required(filename: impl Into<PathBuf>) -> Self {
        Self::File(SourceFile {
            filename: filename.into(),
            required: true,
        })
    }

    pub fn optional(filename: impl Into<PathBuf>) -> Self {
        Self::File(SourceFile {
            filename: filename.into(),
            required: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

// ---

/// Record delimiter for candidates read from stdin and for the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delimiter {
    #[default]
    Lf,
    Nul,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Self::Lf => b'\n',
            Self::Nul => 0,
        }
    }
}
