use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::{ArchiveReader, MAX_ENTRY_BYTES};
use crate::error::{MementoError, Result};

/// An export that has already been extracted to a directory
#[derive(Debug, Clone)]
pub struct DirectoryArchive {
    root: PathBuf,
}

impl DirectoryArchive {
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(MementoError::archive(root.display().to_string(), "not a directory"));
        }
        Ok(Self { root: root.to_path_buf() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an entry name to a path under the root, rejecting names that escape it
    fn entry_path(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes {
            return Err(MementoError::archive(name, "entry name escapes the export directory"));
        }
        Ok(self.root.join(relative))
    }
}

impl ArchiveReader for DirectoryArchive {
    fn entry_names(&self) -> Vec<String> {
        let mut names: Vec<String> = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(&self.root).ok()?;
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                Some(parts.join("/"))
            })
            .collect();
        names.sort();
        names
    }

    fn read_text(&self, name: &str) -> Result<String> {
        let path = self.entry_path(name)?;
        let metadata = fs::metadata(&path).map_err(|e| MementoError::archive(name, e))?;
        if metadata.len() > MAX_ENTRY_BYTES {
            return Err(MementoError::archive(
                name,
                format!("entry is larger than {} bytes", MAX_ENTRY_BYTES),
            ));
        }
        fs::read_to_string(&path).map_err(|e| MementoError::archive(name, e))
    }

    fn contains(&self, name: &str) -> bool {
        self.entry_path(name).map(|p| p.is_file()).unwrap_or(false)
    }
}
