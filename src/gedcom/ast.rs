//! Element tree for GEDCOM documents
//!
//! All elements of a document live in one arena owned by [`Gedcom`] and refer
//! to each other through [`ElementId`] handles. A child knows its parent only
//! by handle, so there are no reference cycles between the two.
//!
//! Record kinds (individual, family, media object, file reference) are not
//! separate node types: [`RecordKind`] classifies an element by its tag and the
//! views in [`kind`] read the underlying generic element.

pub mod document;
pub mod element;
pub mod error;
pub mod index;
pub mod kind;
pub mod multiline;

pub use crate::gedcom::query::events::EventData;
pub use document::Gedcom;
pub use element::{Element, ElementId};
pub use error::GedcomError;
pub use index::ElementIndex;
pub use kind::{Family, FileReference, Individual, MediaObject, RecordKind};
