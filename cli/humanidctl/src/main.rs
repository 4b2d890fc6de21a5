//! humanidctl - check and normalize dnsfence Human IDs
//!
//! Operator tool for validating device names before they reach the backend
//! and for inspecting extended device IDs seen in DNS traffic.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose(), cli.log_json()) {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
