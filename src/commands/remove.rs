//! Remove an entry from the store.

use anyhow::Result;

use crate::store::Store;
use crate::ui;

pub fn run(file: &str, site: &str) -> Result<()> {
    let mut store = Store::load(file)?;

    match store.remove(site) {
        Some(_) => {
            store.save(file)?;
            ui::success(&format!("Removed entry '{}'", site));
        }
        None => ui::warn(&format!("No details found for '{}'.", site)),
    }

    Ok(())
}
