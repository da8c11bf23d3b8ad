//! Generate a random password.

use anyhow::Result;

use crate::{password, strength, ui};

pub fn run(copy: bool) -> Result<()> {
    let pwd = password::generate_password();

    println!("{}", pwd);
    println!("Password strength: {}", strength::classify(&pwd));

    if copy {
        if let Err(e) = ui::copy_to_clipboard_with_timeout(&pwd, 10) {
            ui::warn(&format!("Failed to copy to clipboard: {e:#}"));
        }
    }

    Ok(())
}
