//! GEDCOM tag mnemonics used by the parser and the query engine
//!
//! Tags starting with an underscore are vendor extensions that are common
//! enough in real exports to be interpreted here.

/// Synthetic tag of the document root; never serialized.
pub const ROOT: &str = "ROOT";

/// Value continued on a new line.
pub const CONT: &str = "CONT";
/// Value concatenated without a separator.
pub const CONC: &str = "CONC";

pub const HEAD: &str = "HEAD";
pub const TRLR: &str = "TRLR";

// Record tags
pub const INDI: &str = "INDI";
pub const FAM: &str = "FAM";
pub const OBJE: &str = "OBJE";
pub const FILE: &str = "FILE";
pub const NOTE: &str = "NOTE";
pub const SOUR: &str = "SOUR";

// Family links
pub const FAMS: &str = "FAMS";
pub const FAMC: &str = "FAMC";
pub const HUSB: &str = "HUSB";
pub const WIFE: &str = "WIFE";
pub const CHIL: &str = "CHIL";
pub const PEDI: &str = "PEDI";

/// Relationship of a child to the father (vendor extension).
pub const FATHER_RELATION: &str = "_FREL";
/// Relationship of a child to the mother (vendor extension).
pub const MOTHER_RELATION: &str = "_MREL";

// Events
pub const BIRT: &str = "BIRT";
pub const DEAT: &str = "DEAT";
pub const BURI: &str = "BURI";
pub const CENS: &str = "CENS";
pub const MARR: &str = "MARR";
pub const DATE: &str = "DATE";
pub const PLAC: &str = "PLAC";

// Individual attributes
pub const NAME: &str = "NAME";
pub const GIVN: &str = "GIVN";
pub const SURN: &str = "SURN";
pub const SEX: &str = "SEX";
pub const PRIV: &str = "PRIV";
pub const OCCU: &str = "OCCU";
pub const CHAN: &str = "CHAN";

// Multimedia
pub const FORM: &str = "FORM";
pub const TITL: &str = "TITL";

/// True for the two continuation tags, which never count as substantive children.
pub fn is_continuation(tag: &str) -> bool {
    tag == CONT || tag == CONC
}
