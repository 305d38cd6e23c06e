//! Claimsift CLI — unclaimed-property owner-record filtering tool.
//!
//! Reads a CSV of owner records, filters it down to mailable personal
//! owners, and writes a fixed-schema report CSV.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
