//! User interaction helpers for Passkeep.
//!
//! This module centralizes terminal prompting, status output, and
//! clipboard interactions. No store or password logic should live here.

use anyhow::{Context, Result};
use clipboard::{ClipboardContext, ClipboardProvider};
use console::style;
use std::io::{self, Write};
use std::time::Duration;

/// Ask a yes/no question on the terminal. Anything but an explicit yes,
/// including a failed read, counts as no.
pub fn prompt_yes(question: &str) -> bool {
    print!("{} [y/N]: ", question);
    io::stdout().flush().ok();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", style("!").yellow().bold(), msg);
}

/// Place `text` on the system clipboard and clear it after `secs`
/// seconds, unless the user has copied something else in the meantime.
pub fn copy_to_clipboard_with_timeout(text: &str, secs: u64) -> Result<()> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("clipboard unavailable")?;

    ctx.set_contents(text.to_string())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to write to clipboard")?;

    let expected = text.to_string();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(secs));
        clear_if_unchanged(&expected);
    });

    Ok(())
}

fn clear_if_unchanged(expected: &str) {
    let ctx: Result<ClipboardContext, _> = ClipboardProvider::new();
    if let Ok(mut ctx) = ctx {
        let current: Result<String, _> = ctx.get_contents();
        if current.ok().as_deref() == Some(expected) {
            let _ = ctx.set_contents(String::new());
        }
    }
}
