//! Update the password of an existing entry.

use anyhow::Result;

use crate::cli::UpdateArgs;
use crate::store::{Credential, Store};
use crate::{strength, ui};

pub fn run(file: &str, args: UpdateArgs) -> Result<()> {
    let mut store = Store::load(file)?;

    let email = match store.get(&args.site) {
        Some(c) => c.email.clone(),
        None => {
            ui::warn(&format!("No details found for '{}'.", args.site));
            return Ok(());
        }
    };

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

    store.insert(&args.site, Credential { email, password });
    store.save(file)?;

    ui::success(&format!("Updated entry '{}'", args.site));
    Ok(())
}
