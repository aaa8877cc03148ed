//! Command-line front end for stlcalc
//!
//! Measures each STL file given on the command line independently and
//! prints its surface area and volume.
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use stlcalc_core::StlCalculator;
use tracing::{error, info};

pub mod report;

pub use report::{FileReport, Units};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary per file
    #[default]
    Text,
    /// One JSON array covering all files
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "stlcalc")]
#[command(about = "Surface area and volume of ASCII STL meshes")]
#[command(version)]
pub struct Cli {
    /// ASCII STL files to measure
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Unit suffix for text output
    #[arg(short, long, value_enum, default_value_t = Units::Plain)]
    pub units: Units,

    /// Report unreadable files and carry on with the rest
    #[arg(short, long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Measure every file in `cli.files`, writing results to `out`.
///
/// Without `--keep-going` the first unreadable file aborts the run. With it,
/// failures are logged and the run fails at the end if any file did.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let mut reports = Vec::with_capacity(cli.files.len());
    let mut measured = 0usize;
    let mut failed = 0usize;

    for path in &cli.files {
        let calc = match StlCalculator::new(path) {
            Ok(calc) => calc,
            Err(e) if cli.keep_going => {
                error!("{e}");
                failed += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to measure {}", path.display()))
            }
        };

        match cli.format {
            OutputFormat::Text => {
                if measured > 0 {
                    writeln!(out)?;
                }
                report::write_text(out, &calc, cli.units)?;
            }
            OutputFormat::Json => reports.push(FileReport::from(&calc)),
        }
        measured += 1;
    }

    if cli.format == OutputFormat::Json {
        report::write_json(out, &reports)?;
    }

    info!(measured, failed, "done");
    if failed > 0 {
        bail!("{failed} of {} files could not be read", cli.files.len());
    }
    Ok(())
}
