//! Queries over a parsed document
//!
//! - [`relations`]: the family graph formed by FAMS/FAMC/HUSB/WIFE/CHIL links
//! - [`events`]: birth, death, burial, census and marriage sub-records
//! - [`dates`]: year extraction from free-form dates
//! - [`criteria`]: compound `key=value` matching of individuals
//!
//! Sparse data never fails a query. Unresolved pointers are skipped and
//! missing events or years produce empty results. Only a link that resolves to
//! a record of the wrong kind is reported as [`GedcomError::Resolution`].
//!
//! [`GedcomError::Resolution`]: crate::gedcom::ast::GedcomError::Resolution

pub mod criteria;
pub mod dates;
pub mod events;
pub mod relations;

pub use events::EventData;

/// Which family links of an individual to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyType {
    /// FAMS: families where the individual is a spouse
    Spouse,
    /// FAMC: families where the individual is a child
    Child,
    #[default]
    All,
}

/// Which members of a family to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembersType {
    #[default]
    All,
    /// HUSB and WIFE
    Parents,
    Husband,
    Wife,
    Children,
}

/// Which parents count when walking up the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentType {
    #[default]
    All,
    /// Biological parents only, judged by PEDI on the FAMC link and by
    /// `_FREL`/`_MREL` on the family's CHIL entry
    Natural,
}

/// Ancestor enumeration uses the same filter as parent lookup
pub type AncestorType = ParentType;
