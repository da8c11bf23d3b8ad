//! Retrieve and display an entry from the store.

use anyhow::Result;

use crate::store::Store;
use crate::ui;

pub fn run(file: &str, site: &str, copy: bool) -> Result<()> {
    let store = Store::load(file)?;

    let credential = match store.get(site) {
        Some(c) => c,
        None => {
            ui::warn(&format!("No details found for '{}'.", site));
            return Ok(());
        }
    };

    println!("Email:    {}", credential.email);
    println!("Password: {}", credential.password);

    if copy {
        if let Err(e) = ui::copy_to_clipboard_with_timeout(&credential.password, 10) {
            ui::warn(&format!("Failed to copy to clipboard: {e:#}"));
        }
    }

    Ok(())
}
