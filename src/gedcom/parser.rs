//! Parser for GEDCOM documents
//!
//! Builds the element tree from the flat, level-annotated line stream produced
//! by the lexer. Strict mode rejects every line that does not match the grammar
//! and every level jump; lenient mode repairs the quirks common in real exports
//! (bare continuation lines, blank lines, level jumps) and logs each repair.

pub mod api;
pub mod builder;
pub mod options;

pub use api::{parse_bytes, parse_file, parse_reader, parse_str};
pub use builder::TreeBuilder;
pub use options::ParseOptions;
