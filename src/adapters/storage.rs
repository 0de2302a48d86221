use crate::domain::ports::KeyValueStore;
use crate::utils::error::{Result, RsvpError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Key-value entries kept as one JSON object in a file. Every write rewrites
/// the whole file; concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| RsvpError::StorageError {
            message: format!("{} is not a valid store file: {}", self.path.display(), e),
        })
    }

    /// Entries to start a write from. An unparseable file is replaced rather
    /// than blocking every later write.
    fn entries_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(RsvpError::StorageError { message }) => {
                tracing::warn!("Overwriting unreadable store: {}", message);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.entries_for_write()?;
        entries.remove(key);
        self.write_entries(&entries)
    }
}
