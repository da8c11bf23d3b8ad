//! Passkeep — a minimal, local credential keeper.
//!
//! The entry point only parses arguments, dispatches the subcommand, and
//! turns a failed dispatch into a nonzero exit code. Command
//! implementations live in `commands/`, terminal helpers in `ui.rs`.

use clap::Parser;

mod cli;
mod commands;
mod password;
mod store;
mod strength;
mod ui;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = commands::dispatch(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
