//! Command-line interface definitions for Passkeep.
//!
//! This module defines the public CLI surface of Passkeep using `clap`.
//! It contains no application logic and exists solely to describe how
//! users interact with the program from the terminal.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "passkeep",
    version = "0.1",
    about = "A minimal, local credential keeper",
    long_about = r#"
Passkeep is a small, local-first credential keeper.

Website, email, and password triples are stored in a single JSON file on
disk. Passkeep does not use the network, does not run background
services, and does not depend on external infrastructure.

Typical usage:
  passkeep add github --email me@example.com --generate
  passkeep get github
  passkeep list
  passkeep gen --copy

Website names are case-insensitive: they are trimmed and lowercased both
when stored and when looked up, so "GitHub" and "github" refer to the
same entry.

Passwords are stored in plain text. Keep the store file somewhere only
you can read.
"#,
)]
pub struct Cli {
    /// Path to the credential store file
    #[arg(long, value_name = "FILE", default_value = "passwords.json", global = true)]
    pub file: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new entry to the store
    ///
    /// Stores a website/email/password triple. The password can be given
    /// on the command line, generated, or typed at a hidden prompt.
    ///
    /// By default, existing entries are not overwritten unless
    /// --force is specified.
    Add(AddArgs),

    /// Retrieve and display a stored entry
    ///
    /// Looks up a website by name and prints the stored email and
    /// password. Use --copy to also place the password on the clipboard
    /// for a short time.
    Get {
        /// Website name to look up
        site: String,

        /// Copy the password to the clipboard for 10 seconds
        #[arg(short, long)]
        copy: bool,
    },

    /// List all website names in the store
    ///
    /// This command only displays website names, never passwords.
    List,

    /// Remove an entry from the store
    ///
    /// Permanently deletes the specified entry.
    /// This action cannot be undone.
    Remove {
        /// Website name of the entry to remove
        site: String,
    },

    /// Update the password of an existing entry
    ///
    /// Replaces the stored password; the email is kept as-is. The new
    /// password can be given on the command line, generated, or typed
    /// at a hidden prompt.
    Update(UpdateArgs),

    /// Generate a random password
    ///
    /// Produces a 12–18 character password containing 8–10 letters,
    /// 2–4 digits, and 2–4 symbols, and prints its strength rating.
    Gen {
        /// Copy the generated password to the clipboard for 10 seconds
        #[arg(short, long)]
        copy: bool,
    },

    /// Rate the strength of a password
    ///
    /// Prints Weak, Medium, or Strong based on length and character
    /// variety. Nothing is stored.
    Strength {
        /// Password to rate
        password: String,
    },
}

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    /// Website name (e.g. "github", "bank")
    pub site: String,

    /// Email or username for the entry
    #[arg(short, long)]
    pub email: String,

    /// Password to store; read from a hidden prompt when omitted
    #[arg(short, long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Generate the password instead of providing one
    #[arg(short, long)]
    pub generate: bool,

    /// Overwrite an existing entry without prompting
    #[arg(short, long)]
    pub force: bool,

    /// Copy the stored password to the clipboard for 10 seconds
    #[arg(short, long)]
    pub copy: bool,
}

#[derive(Args, Clone, Debug)]
pub struct UpdateArgs {
    /// Website name of the entry to update
    pub site: String,

    /// New password; read from a hidden prompt when omitted
    #[arg(short, long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Generate the new password instead of providing one
    #[arg(short, long)]
    pub generate: bool,

    /// Copy the new password to the clipboard for 10 seconds
    #[arg(short, long)]
    pub copy: bool,
}
