// std imports
use std::ffi::OsString;

// third-party imports
use clap::Parser;
use fnmatch::{Flag, Flags};

// ---

/// Shell-style glob matcher, prints the candidates matching the pattern.
///
/// Candidates are taken from the command line or, when none are given,
/// from standard input records.
#[derive(Parser, Debug)]
#[command(name = "fnm", version)]
pub struct Opt {
    /// Configuration file path, may be repeated; '-' or an empty value skips the files listed before it and the default configuration file.
    #[arg(long, value_name = "FILE", env = "FNM_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Treat backslash as an ordinary character.
    #[arg(short = 'e', long, env = "FNM_NOESCAPE")]
    pub noescape: bool,

    /// Do not let wildcards match '/' and enable '**/' recursion.
    #[arg(short, long, env = "FNM_PATHNAME")]
    pub pathname: bool,

    /// Let wildcards match a leading period.
    #[arg(short, long, env = "FNM_DOTMATCH")]
    pub dotmatch: bool,

    /// Ignore ASCII case.
    #[arg(short = 'i', long, env = "FNM_CASEFOLD")]
    pub casefold: bool,

    /// Expand '{a,b}' alternatives.
    #[arg(short = 'x', long, env = "FNM_EXTGLOB")]
    pub extglob: bool,

    /// Matching flags as a comma-separated list of names or a numeric bitmask, may be repeated.
    #[arg(short, long, value_name = "LIST", value_parser = Flags::clap_parser(), num_args = 1)]
    pub flags: Vec<Flags>,

    /// Print candidates that do not match.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected candidates.
    #[arg(short, long, conflicts_with = "quiet")]
    pub count: bool,

    /// Print nothing, report the result with the exit status only.
    #[arg(short, long)]
    pub quiet: bool,

    /// Use NUL as the record delimiter for input and output.
    #[arg(short = 'z', long)]
    pub null: bool,

    /// Glob pattern.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Candidates to test, standard input records are used when none are given.
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<OsString>,
}

impl Opt {
    /// Returns the flag set selected by the switches and `--flags` values together.
    pub fn flags(&self) -> Flags {
        let switches = [
            (self.noescape, Flag::NoEscape),
            (self.pathname, Flag::PathName),
            (self.dotmatch, Flag::DotMatch),
            (self.casefold, Flag::CaseFold),
            (self.extglob, Flag::ExtGlob),
        ];

        let mut flags = switches.into_iter().filter(|(on, _)| *on).map(|(_, flag)| flag).collect::<Flags>();
        for extra in &self.flags {
            flags |= *extra;
        }
        flags
    }

    /// Returns the configuration files to load and whether the default configuration file must be skipped.
    pub fn configs(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();

        (&self.config[offset..], no_default)
    }
}

#[cfg(test)]
mod tests;
