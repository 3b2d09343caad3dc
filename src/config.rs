// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source},
};

// ---

pub const APP_NAME: &str = "fnm";

/// Returns the directory holding the user configuration file, if the platform has one.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Starts loading settings with the given configuration files applied on top of the defaults.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

// ---

#[derive(Debug)]
pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file in the platform configuration directory.
    pub fn no_default(self, value: bool) -> Self {
        Self {
            no_default: value,
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(self) -> Vec<Source> {
        let mut sources = Vec::with_capacity(self.paths.len() + 1);

        if !self.no_default {
            match config_dir() {
                Some(dir) => sources.push(Source::optional(dir.join("config"))),
                None => log::debug!("no configuration directory is available on this platform"),
            }
        }

        sources.extend(self.paths.into_iter().map(Source::required));
        sources
    }
}
