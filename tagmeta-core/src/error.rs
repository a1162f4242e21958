//! Error types for metadata extraction and editing.

use thiserror::Error;

/// Extraction failure: the whole record is withheld, never partially built.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The underlying parser could not open or parse the file.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The file parsed but carries no metadata tag at all.
    #[error("no metadata tag found")]
    NoTag,
}

/// Edit failure: an edit either persists fully or reports one of these.
#[derive(Debug, Error)]
pub enum EditError {
    /// The file could not be opened or parsed for writing.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The field name is outside the supported tag vocabulary.
    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    /// The value does not fit the field's expected shape.
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: &'static str, value: String },

    /// The tag could not be written back to disk.
    #[error("failed to write tag: {0}")]
    Write(String),
}
