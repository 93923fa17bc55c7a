//! Error types for export loading, indexing and windowing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MementoError {
    #[error("Malformed export entry {entry}: {source}")]
    MalformedExport {
        entry: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Export entry {entry} is not a record list")]
    NotARecordList { entry: String },

    #[error("Record {} is missing required field `{field}`", .id.as_deref().unwrap_or("<unknown>"))]
    MissingRequiredField { field: &'static str, id: Option<String> },

    #[error("Invalid window configuration: max_visible must be positive (got {max_visible})")]
    InvalidWindowConfig { max_visible: usize },

    #[error("Failed to read archive entry {entry}: {reason}")]
    ArchiveRead { entry: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MementoError {
    pub(crate) fn archive(entry: impl Into<String>, reason: impl ToString) -> Self {
        Self::ArchiveRead { entry: entry.into(), reason: reason.to_string() }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, MementoError>;
