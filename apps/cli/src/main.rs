//! Routedoc CLI — API documentation staging tool.
//!
//! Turns a host application's exported route table into grouped,
//! human-editable endpoint records and a rendered index.

mod commands;
mod export;
mod writer;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
