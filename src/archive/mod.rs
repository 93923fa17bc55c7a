//! Named text entries of an export container
//!
//! An export is read through [`ArchiveReader`], which only knows how to list
//! entries and hand back an entry's text. Three readers are provided:
//!
//! - [`MemoryArchive`] - entries already in memory
//! - [`ZipArchiveReader`] - a downloaded `.zip` export
//! - [`DirectoryArchive`] - an export that was already extracted to disk

pub mod directory;
pub mod memory;
pub mod zip;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

pub use directory::DirectoryArchive;
pub use memory::MemoryArchive;
pub use self::zip::ZipArchiveReader;

use crate::error::{MementoError, Result};

/// Largest entry the readers will load into memory: 512 MiB
pub const MAX_ENTRY_BYTES: u64 = 512 * 1024 * 1024;

/// Locations of the account entry across export generations
pub const ACCOUNT_ENTRY_CANDIDATES: &[&str] = &["account.js", "data/account.js"];

/// Locations of the posts entry across export generations
pub const POSTS_ENTRY_CANDIDATES: &[&str] =
    &["tweet.js", "tweets.js", "data/tweet.js", "data/tweets.js"];

/// Read access to the named text entries of an export
pub trait ArchiveReader {
    /// Names of all entries, `/`-separated
    fn entry_names(&self) -> Vec<String>;

    /// Full text of one entry
    fn read_text(&self, name: &str) -> Result<String>;

    fn contains(&self, name: &str) -> bool {
        self.entry_names().iter().any(|n| n == name)
    }
}

/// Return the first candidate entry name present in `archive`
pub fn resolve_entry<A: ArchiveReader + ?Sized>(
    archive: &A,
    candidates: &[&str],
) -> Result<String> {
    let names = archive.entry_names();
    let found = candidates.iter().find(|c| names.iter().any(|n| n == *c));

    match found {
        Some(name) => {
            debug!(entry = %name, "resolved export entry");
            Ok(name.to_string())
        }
        None => Err(MementoError::archive(candidates.join(" | "), "entry not found in export")),
    }
}

/// Open an export on disk: a directory is read as an extracted export,
/// anything else as a zip container
pub fn open_export(path: &Path) -> Result<Box<dyn ArchiveReader>> {
    if path.is_dir() {
        return Ok(Box::new(DirectoryArchive::open(path)?));
    }

    let file = File::open(path).map_err(|e| MementoError::archive(path.display().to_string(), e))?;
    Ok(Box::new(ZipArchiveReader::from_reader(BufReader::new(file))?))
}
