//! Parse options

use crate::gedcom::config::ParsingConfig;

/// Controls how forgiving the parser is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject malformed lines and level jumps instead of repairing them
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions { strict: true }
    }

    pub fn lenient() -> Self {
        ParseOptions { strict: false }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl From<&ParsingConfig> for ParseOptions {
    fn from(config: &ParsingConfig) -> Self {
        ParseOptions {
            strict: config.strict,
        }
    }
}
