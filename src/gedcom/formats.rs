//! Renderers for element trees
//!
//! - [`serializer`]: GEDCOM text, re-splitting long and multi-line values
//! - [`treeviz`]: box-drawing outline for humans
//! - [`json`]: serde view of the tree, written as JSON or YAML

pub mod json;
pub mod serializer;
pub mod treeviz;

use crate::gedcom::ast::{ElementId, Gedcom};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure of a structured (serde) renderer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML rendering failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Line terminator used when writing GEDCOM text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// The formats a document can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Gedcom,
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Gedcom,
            OutputFormat::Treeviz,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Gedcom => "gedcom",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("unknown output format '{}'", s))
    }
}

/// Render the subtree at `id` (the whole document for the root)
pub fn render(
    doc: &Gedcom,
    id: ElementId,
    format: OutputFormat,
    terminator: LineTerminator,
) -> Result<String, RenderError> {
    Ok(match format {
        OutputFormat::Gedcom => serializer::render_with(doc, id, true, terminator),
        OutputFormat::Treeviz => treeviz::to_treeviz_str(doc, id),
        OutputFormat::Json => json::to_json_string(doc, id)?,
        OutputFormat::Yaml => json::to_yaml_string(doc, id)?,
    })
}
