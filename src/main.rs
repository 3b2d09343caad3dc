// std imports
use std::{
    io::{BufWriter, ErrorKind, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use fnm::{
    App, Delimiter, Options, OutputMode,
    cli::{self, Opt},
    config,
    error::*,
    settings::Settings,
};

const FNM_DEBUG_LOG: &str = "FNM_DEBUG_LOG";
const FNM_DEBUG_LOG_STYLE: &str = "FNM_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    if std::env::var(FNM_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(FNM_DEBUG_LOG).write_style(FNM_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let (configs, no_default_configs) = opt.configs();
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("loaded settings: {:?}", settings);

    Ok(settings)
}

/// Returns whether any candidate was selected.
fn run() -> Result<bool> {
    let opt = Opt::parse();
    let settings = bootstrap(&opt)?;

    let flags = settings.flags | opt.flags();
    let delimiter = if opt.null { Delimiter::Nul } else { settings.delimiter };
    let output = if opt.quiet {
        OutputMode::Quiet
    } else if opt.count {
        OutputMode::Count
    } else {
        OutputMode::Candidates
    };

    let app = App::new(Options {
        pattern: opt.pattern,
        flags,
        invert: opt.invert_match,
        output,
        delimiter,
    });

    let mut out = BufWriter::new(stdout().lock());
    let result = if opt.candidates.is_empty() {
        log::debug!("reading candidates from stdin");
        app.run_reader(stdin().lock(), &mut out)
    } else {
        app.run(&opt.candidates, &mut out)
    };

    match result {
        Ok(selected) => Ok(selected != 0),
        Err(Error::Io(ref e)) if e.kind() == ErrorKind::BrokenPipe => Ok(true),
        Err(err) => Err(err),
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
