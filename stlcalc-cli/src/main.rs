//! stlcalc - print surface area and volume of ASCII STL files
//!
//! Usage: stlcalc [OPTIONS] <FILE>...
//!
//! Logs go to stderr; `RUST_LOG` overrides the `-v` level.
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use stlcalc_cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli, &mut out);
    out.flush()?;
    result
}
