//! List all entries in the store.

use anyhow::Result;

use crate::store::Store;
use crate::ui;

pub fn run(file: &str) -> Result<()> {
    let store = Store::load(file)?;

    if store.is_empty() {
        ui::warn("No passwords saved yet.");
        return Ok(());
    }

    println!("Entries:");
    for site in store.sites() {
        println!("- {}", site);
    }

    Ok(())
}
