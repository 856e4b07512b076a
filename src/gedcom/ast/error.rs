//! Error types for parsing and querying GEDCOM documents

use thiserror::Error;

/// Errors raised while reading, querying or writing a GEDCOM document
///
/// Sparse data is never an error: an unresolved pointer, a missing relative or
/// a date without a year all produce empty results instead.
#[derive(Debug, Error)]
pub enum GedcomError {
    /// A line does not match `LEVEL SP (POINTER SP)? TAG (SP VALUE)?`
    #[error("line {line}: {reason}: '{text}'")]
    MalformedLine {
        line: usize,
        text: String,
        reason: String,
    },

    /// A line's level does not fit under any open element
    #[error("line {line}: {reason}")]
    Structural { line: usize, reason: String },

    /// A cross-reference resolves to a record of the wrong kind
    #[error("pointer {pointer} resolves to a {found} record, expected {expected}")]
    Resolution {
        pointer: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An operation was invoked on an element of the wrong kind
    #[error("expected {expected} element, found {found}")]
    WrongKind {
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: input is not valid UTF-8")]
    Encoding { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GedcomError {
    /// Source line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            GedcomError::MalformedLine { line, .. }
            | GedcomError::Structural { line, .. }
            | GedcomError::Encoding { line } => Some(*line),
            _ => None,
        }
    }
}
