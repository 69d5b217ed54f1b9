//! Persistence for the local journal.
//!
//! The whole journal is one JSON-encoded array in a single file,
//! rewritten on every change.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Entry;

pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Journal location under the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join("evman");

        Ok(data_dir.join("journal.json"))
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all entries; a missing file is an empty journal.
    pub fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Corrupt journal file at {}", self.path.display()))
    }

    /// Rewrite the journal file with the given entries.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Empty the journal, in memory and on disk.
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    /// Write the full journal to `path` as a standalone JSON document.
    /// Returns the number of exported entries.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let entries = self.load()?;

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::EntryKind;

    fn store_in(dir: &Path) -> JournalStore {
        JournalStore::open(dir.join("journal.json"))
    }

    #[test]
    fn missing_file_is_an_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let entries = vec![
            Entry::new("first".to_string(), None, EntryKind::Info),
            Entry::new("second".to_string(), Some("notes".to_string()), EntryKind::Error),
        ];
        store.save(&entries).unwrap();

        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn clear_empties_the_persisted_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .save(&[Entry::new("a".to_string(), None, EntryKind::Info)])
            .unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_empty());
        let raw = std::fs::read_to_string(dir.path().join("journal.json")).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn export_of_empty_journal_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let out = dir.path().join("export.json");
        let count = store.export_to(&out).unwrap();
        assert_eq!(count, 0);

        let raw = std::fs::read_to_string(&out).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn export_contains_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .save(&[
                Entry::new("a".to_string(), None, EntryKind::Info),
                Entry::new("b".to_string(), None, EntryKind::Debug),
            ])
            .unwrap();

        let out = dir.path().join("export.json");
        let count = store.export_to(&out).unwrap();
        assert_eq!(count, 2);

        let exported: Vec<Entry> =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(exported.len(), 2);
    }
}
