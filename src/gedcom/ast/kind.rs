//! Record kinds and the views over them
//!
//! A view borrows the document and wraps the handle of an element whose tag
//! matches the kind. Views never copy structure; every accessor reads the
//! children of the underlying generic element. Individual-specific accessors
//! live next to the queries that use them in `query::events`.

use crate::gedcom::ast::document::Gedcom;
use crate::gedcom::ast::element::{Element, ElementId};
use crate::gedcom::ast::error::GedcomError;
use crate::gedcom::tags;
use serde::Serialize;
use std::fmt;

/// Advisory classification of an element by its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Individual,
    Family,
    Object,
    File,
    Generic,
}

impl RecordKind {
    pub fn of_tag(tag: &str) -> Self {
        match tag {
            tags::INDI => RecordKind::Individual,
            tags::FAM => RecordKind::Family,
            tags::OBJE => RecordKind::Object,
            tags::FILE => RecordKind::File,
            _ => RecordKind::Generic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Individual => "individual",
            RecordKind::Family => "family",
            RecordKind::Object => "object",
            RecordKind::File => "file",
            RecordKind::Generic => "generic",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! record_view {
    ($(#[$doc:meta])* $view:ident, $kind:expr, $ctor:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $view<'a> {
            doc: &'a Gedcom,
            id: ElementId,
        }

        impl<'a> $view<'a> {
            pub fn id(&self) -> ElementId {
                self.id
            }

            pub fn element(&self) -> &'a Element {
                self.doc.element(self.id)
            }

            pub fn pointer(&self) -> &'a str {
                self.element().pointer()
            }

            pub fn document(&self) -> &'a Gedcom {
                self.doc
            }

            /// Value of the first substantive child carrying `tag`
            pub fn child_value(&self, tag: &str) -> Option<&'a str> {
                self.doc.child_value(self.id, tag)
            }
        }

        impl Gedcom {
            #[doc = concat!("View `id` as a ", stringify!($view), " record")]
            ///
            /// Fails with [`GedcomError::WrongKind`] when the tag does not match.
            pub fn $ctor(&self, id: ElementId) -> Result<$view<'_>, GedcomError> {
                self.expect_kind(id, $kind)?;
                Ok($view { doc: self, id })
            }
        }
    };
}

record_view!(
    /// An INDI record
    Individual,
    RecordKind::Individual,
    individual
);
record_view!(
    /// A FAM record
    Family,
    RecordKind::Family,
    family
);
record_view!(
    /// An OBJE (multimedia) record or link
    MediaObject,
    RecordKind::Object,
    media_object
);
record_view!(
    /// A FILE reference
    FileReference,
    RecordKind::File,
    file_reference
);

impl Gedcom {
    /// Fail with `WrongKind` unless `id` is a record of `expected` kind
    pub fn expect_kind(&self, id: ElementId, expected: RecordKind) -> Result<(), GedcomError> {
        let element = self.element(id);
        if element.kind() == expected {
            Ok(())
        } else {
            Err(GedcomError::WrongKind {
                expected: expected.name(),
                found: element.tag().to_string(),
            })
        }
    }

    /// Top-level records of `kind` in file order
    pub fn records_of_kind(&self, kind: RecordKind) -> impl Iterator<Item = ElementId> + '_ {
        self.get_root_child_elements()
            .iter()
            .copied()
            .filter(move |id| self.element(*id).kind() == kind)
    }

    /// Top-level INDI records in file order
    pub fn individuals(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.records_of_kind(RecordKind::Individual)
    }

    /// Top-level FAM records in file order
    pub fn families(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.records_of_kind(RecordKind::Family)
    }
}

impl<'a> Family<'a> {
    /// Pointer value of the first HUSB line
    pub fn husband(&self) -> Option<&'a str> {
        self.child_value(tags::HUSB)
    }

    /// Pointer value of the first WIFE line
    pub fn wife(&self) -> Option<&'a str> {
        self.child_value(tags::WIFE)
    }

    /// Pointer values of every CHIL line
    pub fn children(&self) -> Vec<&'a str> {
        let doc = self.doc;
        doc.children_with_tag(self.id, tags::CHIL)
            .map(|child| doc.element(child).value())
            .collect()
    }
}

impl<'a> MediaObject<'a> {
    pub fn file(&self) -> Option<&'a str> {
        self.child_value(tags::FILE)
    }

    /// FORM directly under the object, or under its FILE line (5.5.1 layout)
    pub fn format(&self) -> Option<&'a str> {
        let doc = self.doc;
        self.child_value(tags::FORM).or_else(|| {
            doc.children_with_tag(self.id, tags::FILE)
                .find_map(|file| doc.child_value(file, tags::FORM))
        })
    }

    pub fn title(&self) -> Option<&'a str> {
        self.child_value(tags::TITL)
    }
}

impl<'a> FileReference<'a> {
    /// The referenced path or URL
    pub fn path(&self) -> &'a str {
        self.element().value()
    }

    pub fn format(&self) -> Option<&'a str> {
        self.child_value(tags::FORM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_tag() {
        assert_eq!(RecordKind::of_tag("INDI"), RecordKind::Individual);
        assert_eq!(RecordKind::of_tag("FAM"), RecordKind::Family);
        assert_eq!(RecordKind::of_tag("OBJE"), RecordKind::Object);
        assert_eq!(RecordKind::of_tag("FILE"), RecordKind::File);
        assert_eq!(RecordKind::of_tag("NOTE"), RecordKind::Generic);
        assert_eq!(RecordKind::of_tag("indi"), RecordKind::Generic);
    }

    #[test]
    fn test_views_check_kind() {
        let mut doc = Gedcom::new();
        let indi = doc.new_child_element(ElementId::ROOT, "INDI", "@I1@", "");
        assert!(doc.individual(indi).is_ok());
        match doc.family(indi) {
            Err(GedcomError::WrongKind { expected, found }) => {
                assert_eq!(expected, "family");
                assert_eq!(found, "INDI");
            }
            other => panic!("expected WrongKind, got {:?}", other.map(|f| f.id())),
        }
    }

    #[test]
    fn test_family_accessors() {
        let mut doc = Gedcom::new();
        let fam = doc.new_child_element(ElementId::ROOT, "FAM", "@F1@", "");
        doc.new_child_element(fam, "HUSB", "", "@I1@");
        doc.new_child_element(fam, "WIFE", "", "@I2@");
        doc.new_child_element(fam, "CHIL", "", "@I3@");
        doc.new_child_element(fam, "CHIL", "", "@I4@");
        let family = doc.family(fam).unwrap();
        assert_eq!(family.husband(), Some("@I1@"));
        assert_eq!(family.wife(), Some("@I2@"));
        assert_eq!(family.children(), vec!["@I3@", "@I4@"]);
        assert_eq!(family.pointer(), "@F1@");
    }

    #[test]
    fn test_media_object_and_file_reference() {
        let mut doc = Gedcom::new();
        let obje = doc.new_child_element(ElementId::ROOT, "OBJE", "@O1@", "");
        let file = doc.new_child_element(obje, "FILE", "", "photos/anna.jpg");
        doc.new_child_element(file, "FORM", "", "jpg");
        doc.new_child_element(obje, "TITL", "", "Anna, 1902");

        let object = doc.media_object(obje).unwrap();
        assert_eq!(object.file(), Some("photos/anna.jpg"));
        assert_eq!(object.format(), Some("jpg"));
        assert_eq!(object.title(), Some("Anna, 1902"));

        let reference = doc.file_reference(file).unwrap();
        assert_eq!(reference.path(), "photos/anna.jpg");
        assert_eq!(reference.format(), Some("jpg"));
    }

    #[test]
    fn test_records_of_kind() {
        let mut doc = Gedcom::new();
        doc.new_child_element(ElementId::ROOT, "HEAD", "", "");
        let i1 = doc.new_child_element(ElementId::ROOT, "INDI", "@I1@", "");
        let f1 = doc.new_child_element(ElementId::ROOT, "FAM", "@F1@", "");
        let i2 = doc.new_child_element(ElementId::ROOT, "INDI", "@I2@", "");
        assert_eq!(doc.individuals().collect::<Vec<_>>(), vec![i1, i2]);
        assert_eq!(doc.families().collect::<Vec<_>>(), vec![f1]);
    }
}
