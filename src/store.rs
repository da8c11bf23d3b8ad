//! Credential storage.
//!
//! This module defines the on-disk store format and provides functions
//! for loading, modifying, and saving it.
//!
//! The store is a single JSON file holding a flat object that maps
//! website names to email/password pairs:
//!
//! ```json
//! {
//!     "github": {
//!         "email": "me@example.com",
//!         "password": "hunter2"
//!     }
//! }
//! ```
//!
//! Website keys are trimmed and lowercased on every insert, lookup, and
//! removal, so lookups can never miss an entry over letter case.
//! Passwords are stored in plain text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A single stored credential.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    /// Email or username used to sign in
    pub email: String,

    /// Password in plain text
    pub password: String,
}

/// Complete store contents, keyed by normalized website name.
///
/// Serializes transparently as the flat JSON object shown in the module
/// docs. `BTreeMap` keeps the file and `list` output in a stable order.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Store {
    entries: BTreeMap<String, Credential>,
}

/// Normalize a website name into a store key.
pub fn normalize_site(site: &str) -> String {
    site.trim().to_lowercase()
}

impl Store {
    /// Load a store from disk.
    ///
    /// A missing file is not an error: it loads as an empty store, the
    /// same state a first run starts from. Unreadable or malformed
    /// files are reported as errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Store> {
        let path = path.as_ref();
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Store::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        serde_json::from_str(&data)
            .with_context(|| format!("{} is not a valid credential store", path.display()))
    }

    /// Save the store to disk in pretty-printed JSON format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("failed to serialize credential store")?;

        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn get(&self, site: &str) -> Option<&Credential> {
        self.entries.get(&normalize_site(site))
    }

    pub fn contains(&self, site: &str) -> bool {
        self.entries.contains_key(&normalize_site(site))
    }

    /// Insert or replace the entry for `site`.
    pub fn insert(&mut self, site: &str, credential: Credential) {
        self.entries.insert(normalize_site(site), credential);
    }

    /// Remove the entry for `site`, returning it if present.
    pub fn remove(&mut self, site: &str) -> Option<Credential> {
        self.entries.remove(&normalize_site(site))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored website names, in sorted order.
    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn credential(email: &str, password: &str) -> Credential {
        Credential {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempdir().unwrap();
        let store = Store::load(dir.path().join("passwords.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.json");

        let mut store = Store::default();
        store.insert("github", credential("me@example.com", "s3cret!"));
        store.insert("bank", credential("me@example.com", "hunter2"));
        store.save(&path).unwrap();

        let loaded = Store::load(&path).unwrap();
        assert_eq!(loaded.get("github"), Some(&credential("me@example.com", "s3cret!")));
        assert_eq!(loaded.get("bank"), Some(&credential("me@example.com", "hunter2")));
    }

    #[test]
    fn lookup_is_case_insensitive_both_ways() {
        let mut store = Store::default();
        store.insert("  GitHub ", credential("me@example.com", "pw"));

        assert!(store.contains("github"));
        assert!(store.contains("GITHUB"));
        assert!(store.get("gitHub").is_some());
        assert_eq!(store.sites().collect::<Vec<_>>(), vec!["github"]);

        assert!(store.remove("GITHUB").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn on_disk_format_is_a_flat_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.json");

        let mut store = Store::default();
        store.insert("github", credential("me@example.com", "pw"));
        store.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["github"]["email"], "me@example.com");
        assert_eq!(value["github"]["password"], "pw");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Store::load(&path).is_err());
    }

    #[test]
    fn sites_are_sorted() {
        let mut store = Store::default();
        store.insert("zebra", credential("a", "b"));
        store.insert("apple", credential("a", "b"));
        store.insert("mango", credential("a", "b"));

        assert_eq!(
            store.sites().collect::<Vec<_>>(),
            vec!["apple", "mango", "zebra"]
        );
    }
}
