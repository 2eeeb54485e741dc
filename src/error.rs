//! Error types for the extractor.
//!
//! Uses the dual-error pattern: `ExtractError` for library consumers with
//! full context (offending tag and field path), and the smaller `ValueError`
//! for transform-level parse failures that the field extractor wraps with
//! that context.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A field configured as required matched no text node.
    #[error("missing required value at '{path}' in <{tag}>")]
    MissingValue { tag: String, path: String },

    /// A matched text node was rejected by its transform.
    #[error("invalid value at '{path}' in <{tag}>: {source}")]
    Malformed {
        tag: String,
        path: String,
        #[source]
        source: ValueError,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The incremental reader hit malformed markup.
    #[error("malformed XML stream: {0}")]
    Stream(#[from] quick_xml::Error),

    /// The document ended with elements still open.
    #[error("document ended with {open} unclosed element(s)")]
    UnexpectedEof { open: usize },

    /// An element's raw bytes are not valid UTF-8.
    #[error("element content is not valid UTF-8")]
    NonUtf8,

    /// Failed to open or read an archive member.
    #[error("archive {name}: {source}")]
    Archive {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rejected field value, without tag/path attribution.
///
/// Produced by the transforms in [`crate::xml::transform`]; the field
/// extractor wraps it into [`ExtractError::Malformed`] so failures are
/// attributed to the enclosing element.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Not a parseable integer.
    #[error("invalid integer '{0}'")]
    Integer(String),

    /// Not a parseable number.
    #[error("invalid number '{0}'")]
    Float(String),

    /// Not a parseable datetime.
    #[error("invalid datetime '{value}', expected {format}")]
    DateTime { value: String, format: &'static str },

    /// Not a parseable date.
    #[error("invalid date '{value}', expected {format}")]
    Date { value: String, format: &'static str },
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
