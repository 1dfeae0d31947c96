//! logeach command-line application
//!
//! Prints printf-style templates once per element of JSON arrays given on
//! the command line.

mod args;
mod cli;
mod ops;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use logeach_core::ConsoleBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args { stderr, command } = Args::parse();

    let console = ConsoleBuilder::new().with_stderr(stderr).build();

    info!("logeach started");

    Cli::new(console).handle_command(command)
}
