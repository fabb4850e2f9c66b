//! Error types for the extractor.
//!
//! Uses the dual-error pattern: `ExtractorError` for fatal, batch-level
//! failures and `LineError` for problems confined to a single invoice line,
//! which are recorded and skipped rather than propagated.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
///
/// Any of these aborts the batch before the spreadsheet is written.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The location of the running executable could not be determined.
    #[error("Cannot determine program location: {0}")]
    ProgramLocation(#[source] std::io::Error),

    /// The input directory is missing or cannot be listed.
    #[error("Cannot read input directory {}: {source}", .path.display())]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be decoded to text.
    #[error("Cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: crate::xml::EncodingError,
    },

    /// An input file is not well-formed XML.
    #[error("XML parsing failed for {}: {source}", .path.display())]
    XmlParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Writing the output workbook failed.
    #[error("Spreadsheet write failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Reason a single invoice line was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// A required element was not found.
    #[error("missing element <{element}>")]
    MissingElement { element: String },

    /// An amount element holds text that is not a number.
    #[error("could not convert <{element}> value '{value}' to a number")]
    InvalidNumber { element: String, value: String },
}

impl LineError {
    pub(crate) fn missing(element: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
        }
    }
}
