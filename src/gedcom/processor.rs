//! File processing API
//!
//! Parses a GEDCOM file (or string) and renders the whole document in one of
//! the [`OutputFormat`]s. The CLI's `print` command is a thin wrapper around
//! [`process_file`].
//!
//! ```rust,ignore
//! use gedcom::gedcom::processor::{process_file, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("treeviz")?;
//! println!("{}", process_file("family.ged", &spec)?);
//! ```

use crate::gedcom::ast::{ElementId, GedcomError};
use crate::gedcom::config::GedcomConfig;
use crate::gedcom::formats::{self, LineTerminator, OutputFormat, RenderError};
use crate::gedcom::parser::{parse_file, parse_str, ParseOptions};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// What to parse with and how to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub format: OutputFormat,
    pub terminator: LineTerminator,
    pub options: ParseOptions,
}

impl ProcessingSpec {
    /// Spec for a format name, with strict parsing and LF terminators
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        let format = format.parse().map_err(ProcessingError::InvalidFormat)?;
        Ok(ProcessingSpec {
            format,
            terminator: LineTerminator::default(),
            options: ParseOptions::default(),
        })
    }

    pub fn from_config(config: &GedcomConfig) -> Self {
        ProcessingSpec {
            format: config.output.format,
            terminator: config.output.line_terminator,
            options: ParseOptions::from(&config.parsing),
        }
    }

    /// One spec per output format, with default parsing
    pub fn available_specs() -> Vec<ProcessingSpec> {
        OutputFormat::all()
            .iter()
            .map(|&format| ProcessingSpec {
                format,
                terminator: LineTerminator::default(),
                options: ParseOptions::default(),
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error(transparent)]
    Parse(#[from] GedcomError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Parse the file at `path` and render it according to `spec`
pub fn process_file<P: AsRef<Path>>(
    path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let doc = parse_file(path, spec.options)?;
    debug!(format = %spec.format, "rendering document");
    Ok(formats::render(&doc, ElementId::ROOT, spec.format, spec.terminator)?)
}

/// Like [`process_file`] for in-memory text
pub fn process_str(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    let doc = parse_str(source, spec.options)?;
    Ok(formats::render(&doc, ElementId::ROOT, spec.format, spec.terminator)?)
}
