//! Parsers for the export's text entries
//!
//! # Error Handling Strategy
//!
//! - **Entry-level failures**: An entry whose payload is not valid JSON (after the
//!   assignment prefix is stripped) fails with [`MementoError::MalformedExport`] and
//!   aborts the load. There is no partial entry.
//!
//! - **Field-level parsing**: Timestamp parsing is strict and returns `None` on any
//!   unrecognized form; the normalizer turns that into a skipped record.
//!
//! [`MementoError::MalformedExport`]: crate::error::MementoError::MalformedExport

pub mod deserializers;
pub mod entities;
pub mod export;

pub use deserializers::parse_created_at;
pub use entities::{BasicEntities, EntityDecoder};
pub use export::{ASSIGNMENT_SEPARATOR, parse_export_payload, parse_record_list, strip_assignment};
