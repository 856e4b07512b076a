//! Testing utilities for element tree assertions
//!
//! Asserting on a parsed tree by hand means chasing handles through the arena
//! for every level. The fluent API walks the tree for you and reports the path
//! of the element that failed.
//!
//! # Example
//!
//! ```rust,ignore
//! let doc = parse_str("0 @I1@ INDI\n1 NAME John /Doe/\n", ParseOptions::strict())?;
//!
//! assert_tree(&doc)
//!     .record_count(1)
//!     .record(0, |indi| {
//!         indi.tag("INDI").child(0, |name| {
//!             name.tag("NAME").value("John /Doe/");
//!         });
//!     });
//! ```

mod assertions;

pub use assertions::{assert_tree, DocumentAssertion, ElementAssertion};
