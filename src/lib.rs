//! # gedcom
//!
//! A parser, indexer, query engine and serializer for GEDCOM 5.5 genealogy files.
//!
//! Parsing turns a level-annotated line stream into an arena-backed element tree
//! ([`Gedcom`]). The document lazily indexes its elements by pointer, resolves the
//! family/individual cross-reference graph and renders the tree back to GEDCOM text.
//!
//! ```rust,ignore
//! use gedcom::{parse_file, ParseOptions};
//!
//! let doc = parse_file("family.ged", ParseOptions::lenient())?;
//! for id in doc.individuals() {
//!     let person = doc.individual(id)?;
//!     println!("{:?} born {:?}", person.name(), person.birth_year());
//! }
//! ```
//!
//! ## Testing
//!
//! Unit tests assert on parsed trees through the fluent helpers of
//! `gedcom::testing`, available under `cfg(test)`.

pub mod gedcom;

pub use gedcom::ast::{
    Element, ElementId, ElementIndex, EventData, FileReference, Family, Gedcom, GedcomError,
    Individual, MediaObject, RecordKind,
};
pub use gedcom::config::{GedcomConfig, Loader};
pub use gedcom::formats::{LineTerminator, OutputFormat};
pub use gedcom::parser::{parse_bytes, parse_file, parse_reader, parse_str, ParseOptions};
pub use gedcom::query::{AncestorType, FamilyType, MembersType, ParentType};
