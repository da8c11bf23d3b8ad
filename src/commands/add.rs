//! Add a new entry to the store.

use anyhow::Result;

use crate::cli::AddArgs;
use crate::store::{Credential, Store};
use crate::{strength, ui};

pub fn run(file: &str, args: AddArgs) -> Result<()> {
    let site = args.site.trim();
    if site.is_empty() || args.email.trim().is_empty() {
        ui::warn("Please fill in both website and email.");
        return Ok(());
    }

    let mut store = Store::load(file)?;

    if store.contains(site) && !args.force {
        if !ui::prompt_yes(&format!("Entry '{}' exists. Overwrite?", site)) {
            println!("Aborted.");
            return Ok(());
        }
    }

    let password = super::obtain_password(args.password, args.generate)?;
    if password.is_empty() {
        ui::warn("Password cannot be empty.");
        return Ok(());
    }

    println!("Password strength: {}", strength::classify(&password));

    if args.copy {
        if let Err(e) = ui::copy_to_clipboard_with_timeout(&password, 10) {
            ui::warn(&format!("Failed to copy to clipboard: {e:#}"));
        }
    }

    store.insert(
        site,
        Credential {
            email: args.email,
            password,
        },
    );
    store.save(file)?;

    ui::success(&format!("Stored entry '{}'", site.to_lowercase()));
    Ok(())
}
