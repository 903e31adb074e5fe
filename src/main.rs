//! Entrega Log - delivery ledger with admin-gated editing
//!
//! A CLI tool for registering deliveries, filtering them and exporting
//! the ledger to Excel.

use clap::Parser;
use entrega_log::cli::Cli;
use entrega_log::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
