use std::io::{Cursor, Read, Seek};

use ::zip::ZipArchive;
use tracing::debug;

use super::{ArchiveReader, MAX_ENTRY_BYTES, MemoryArchive};
use crate::error::{MementoError, Result};

const CONTAINER: &str = "<zip container>";

/// A zip export decoded up front.
///
/// Only `.js` entries are extracted; media files in the container are skipped.
#[derive(Debug, Clone, Default)]
pub struct ZipArchiveReader {
    entries: MemoryArchive,
}

impl ZipArchiveReader {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Decode a container from any seekable source, e.g. a buffered file
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_reader_with_limit(reader, MAX_ENTRY_BYTES)
    }

    /// Like [`ZipArchiveReader::from_reader`] with an explicit cap on the
    /// inflated size of each extracted entry
    pub fn from_reader_with_limit<R: Read + Seek>(reader: R, max_entry_bytes: u64) -> Result<Self> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| MementoError::archive(CONTAINER, e))?;
        let mut entries = MemoryArchive::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i).map_err(|e| MementoError::archive(CONTAINER, e))?;
            if !file.is_file() || !file.name().ends_with(".js") {
                continue;
            }

            let name = file.name().to_string();
            // The declared size is only a hint; the cap applies to inflated bytes
            let mut bytes = Vec::with_capacity(file.size().min(max_entry_bytes) as usize);
            (&mut file)
                .take(max_entry_bytes.saturating_add(1))
                .read_to_end(&mut bytes)
                .map_err(|e| MementoError::archive(name.as_str(), e))?;
            if bytes.len() as u64 > max_entry_bytes {
                return Err(MementoError::archive(
                    name,
                    format!("entry is larger than {} bytes", max_entry_bytes),
                ));
            }

            let text = String::from_utf8(bytes).map_err(|e| MementoError::archive(name.as_str(), e))?;
            debug!(entry = %name, bytes = text.len(), "extracted zip entry");
            entries.insert(name, text);
        }

        Ok(Self { entries })
    }
}

impl ArchiveReader for ZipArchiveReader {
    fn entry_names(&self) -> Vec<String> {
        self.entries.entry_names()
    }

    fn read_text(&self, name: &str) -> Result<String> {
        self.entries.read_text(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }
}
