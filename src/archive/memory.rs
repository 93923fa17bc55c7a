use std::collections::BTreeMap;

use super::ArchiveReader;
use crate::error::{MementoError, Result};

/// Export entries held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryArchive {
    entries: BTreeMap<String, String>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArchiveReader for MemoryArchive {
    fn entry_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn read_text(&self, name: &str) -> Result<String> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| MementoError::archive(name, "entry not found in export"))
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
