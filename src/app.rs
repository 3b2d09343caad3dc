// std imports
use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
};

// third-party imports
use fnmatch::{Flag, Flags};

// local imports
use crate::{error::*, settings::Delimiter};

// ---

pub struct Options {
    pub pattern: String,
    pub flags: Flags,
    pub invert: bool,
    pub output: OutputMode,
    pub delimiter: Delimiter,
}

/// What is written for the selected candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Each selected candidate followed by the delimiter.
    #[default]
    Candidates,
    /// Number of selected candidates.
    Count,
    /// Nothing, processing stops at the first selected candidate.
    Quiet,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        log::debug!(
            "pattern {:?} with flags [{}] (0x{:02x})",
            options.pattern,
            options.flags,
            options.flags.bits()
        );
        Self { options }
    }

    /// Tests a single candidate against the pattern.
    pub fn is_match(&self, candidate: &[u8]) -> Result<bool> {
        let Options { pattern, flags, .. } = &self.options;

        let matched = if flags.contains(Flag::ExtGlob) {
            fnmatch::try_fnmatch_extended(pattern, candidate, *flags).map_err(|source| Error::Match {
                pattern: pattern.clone(),
                source,
            })?
        } else {
            fnmatch::fnmatch(pattern, candidate, *flags)
        };

        log::trace!("{:?} matched={}", String::from_utf8_lossy(candidate), matched);
        Ok(matched)
    }

    /// Processes candidates given as command line arguments and returns the number of selected ones.
    pub fn run<W: Write>(&self, candidates: &[OsString], output: &mut W) -> Result<usize> {
        self.process(candidates.iter().map(|x| Ok(x.as_encoded_bytes())), output)
    }

    /// Processes delimited candidate records from the input and returns the number of selected ones.
    pub fn run_reader<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<usize> {
        self.process(input.split(self.options.delimiter.byte()), output)
    }

    fn process<I, C, W>(&self, candidates: I, output: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = io::Result<C>>,
        C: AsRef<[u8]>,
        W: Write,
    {
        let delimiter = self.options.delimiter.byte();
        let mut selected = 0;

        for candidate in candidates {
            let candidate = candidate?;
            let candidate = candidate.as_ref();

            if self.is_match(candidate)? == self.options.invert {
                continue;
            }
            selected += 1;

            match self.options.output {
                OutputMode::Candidates => {
                    output.write_all(candidate)?;
                    output.write_all(&[delimiter])?;
                }
                OutputMode::Count => {}
                OutputMode::Quiet => break,
            }
        }

        if self.options.output == OutputMode::Count {
            writeln!(output, "{}", selected)?;
        }
        output.flush()?;

        log::debug!("selected {} candidates", selected);
        Ok(selected)
    }
}
