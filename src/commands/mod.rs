//! Command dispatch layer for Passkeep.
//!
//! This module maps parsed CLI commands to their concrete implementations.
//! Each command lives in its own file and exposes a single `run()` function.

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands};
use crate::password;

pub mod add;
pub mod gen;
pub mod get;
pub mod list;
pub mod remove;
pub mod strength;
pub mod update;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add(args) => add::run(&cli.file, args),
        Commands::Get { site, copy } => get::run(&cli.file, &site, copy),
        Commands::List => list::run(&cli.file),
        Commands::Remove { site } => remove::run(&cli.file, &site),
        Commands::Update(args) => update::run(&cli.file, args),
        Commands::Gen { copy } => gen::run(copy),
        Commands::Strength { password } => strength::run(&password),
    }
}

/// Resolve the password for `add` and `update`: use the value given on
/// the command line, generate one, or fall back to a hidden prompt.
/// Generated passwords are printed, since the user never typed them.
fn obtain_password(provided: Option<String>, generate: bool) -> Result<String> {
    if generate {
        let pwd = password::generate_password();
        println!("Generated password: {}", pwd);
        return Ok(pwd);
    }

    match provided {
        Some(pwd) => Ok(pwd),
        None => rpassword::prompt_password("Password to store: ")
            .context("failed to read password"),
    }
}
