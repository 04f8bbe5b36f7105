//! wordbook CLI — builds the alphabetical word sidebar for the site.
//!
//! Runs the same builder the site imports, with diagnostics enabled, and
//! emits the result as JSON.

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
