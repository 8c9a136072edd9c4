#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

#[macro_use]
extern crate serde;
#[macro_use]
extern crate tracing;

mod config;
mod error;
mod listing;
mod meta;
mod render;

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

pub use config::Config;

use anyhow::{Context, Result};
use clap::Parser;
use time::UtcOffset;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

use crate::{
    listing::Listing,
    render::{render, RenderMode},
};

#[derive(Debug, Parser)]
#[clap(version)]
/// List the contents of a directory, sorted by name
struct Cli {
    /// Use a long listing format
    #[clap(short = 'l')]
    long: bool,

    /// List entries in columns, filled down then across
    #[clap(short = 'C')]
    columns: bool,

    /// The configuration file to read
    #[clap(long)]
    config: Option<PathBuf>,

    /// The directory to list
    #[clap(default_value = ".")]
    path: PathBuf,
}

/// The outcome of one listing attempt.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The listing was written, possibly with skipped entries.
    Completed,

    /// The directory could not be read; nothing was written.
    Failed,
}

fn main() -> Result<ExitCode> {
    // Must be resolved before any other thread exists.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::read(path)?,
        None => Config::default(),
    };

    let level = config
        .log_level
        .parse::<LevelFilter>()
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(io::stderr)
                .with_filter(level),
        )
        .init();

    debug!(cli = ?cli);
    debug!(config = ?config);

    let outcome = run(
        &cli,
        &config,
        offset,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(match outcome {
        Outcome::Completed => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    })
}

/// Lists the directory named on the command line.
fn run<W, E>(
    cli: &Cli,
    config: &Config,
    offset: UtcOffset,
    out: &mut W,
    err: &mut E,
) -> Result<Outcome>
where
    W: Write,
    E: Write,
{
    let listing = match Listing::read(&cli.path, config.max_entries) {
        Ok(listing) => listing,
        Err(failure) => {
            writeln!(err, "{}: {failure}", env!("CARGO_PKG_NAME"))?;
            return Ok(Outcome::Failed);
        }
    };

    let mode = RenderMode::from_flags(cli.long, cli.columns, config.columns);
    let report = render(mode, &listing, offset, out, err)?;
    debug!(?mode, listed = report.listed, skipped = report.skipped, "listing completed");
    Ok(Outcome::Completed)
}
