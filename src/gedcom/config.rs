//! Configuration loader for the gedcom toolchain.
//!
//! `defaults/gedcom.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GedcomConfig`].

use crate::gedcom::formats::{LineTerminator, OutputFormat};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/gedcom.default.toml");

/// Top-level configuration consumed by gedcom applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GedcomConfig {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub line_terminator: LineTerminator,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (CLI flags use this).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GedcomConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GedcomConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.parsing.strict);
        assert_eq!(config.output.format, OutputFormat::Gedcom);
        assert_eq!(config.output.line_terminator, LineTerminator::Lf);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.strict", false)
            .expect("override to apply")
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .set_override("output.line_terminator", "crlf")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.parsing.strict);
        assert_eq!(config.output.format, OutputFormat::Treeviz);
        assert_eq!(config.output.line_terminator, LineTerminator::CrLf);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("no/such/gedcom.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("no/such/gedcom.toml")
            .build()
            .expect("config to build");
        assert!(config.parsing.strict);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
