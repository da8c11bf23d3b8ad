//! Rate the strength of a password without storing anything.

use anyhow::Result;

use crate::strength;

pub fn run(password: &str) -> Result<()> {
    println!("{}", strength::classify(password));
    Ok(())
}
