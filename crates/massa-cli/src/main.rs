//! Massa Checker - asphalt application bookkeeping
//!
//! A CLI tool that tracks delivered loads, paving passes, and thickness
//! compliance against the 3.5-5.0cm application standard.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
