//! Fluent assertion API for element trees

use crate::gedcom::ast::{ElementId, Gedcom};

/// Create an assertion builder for a document
pub fn assert_tree(doc: &Gedcom) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Gedcom,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level records
    pub fn record_count(self, expected: usize) -> Self {
        let actual = self.doc.get_root_child_elements().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} records, found {}: [{}]",
            expected,
            actual,
            summarize(self.doc, self.doc.get_root_child_elements())
        );
        self
    }

    /// Assert on a top-level record by index
    pub fn record<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let records = self.doc.get_root_child_elements();
        assert!(
            index < records.len(),
            "Record index {} out of bounds (document has {} records)",
            index,
            records.len()
        );
        assertion(ElementAssertion {
            doc: self.doc,
            id: records[index],
            context: format!("records[{}]", index),
        });
        self
    }
}

pub struct ElementAssertion<'a> {
    doc: &'a Gedcom,
    id: ElementId,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    pub fn tag(self, expected: &str) -> Self {
        assert_text("tag", self.doc.element(self.id).tag(), expected, &self.context);
        self
    }

    pub fn pointer(self, expected: &str) -> Self {
        assert_text("pointer", self.doc.element(self.id).pointer(), expected, &self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_text("value", self.doc.element(self.id).value(), expected, &self.context);
        self
    }

    /// Assert the value joined with its CONT/CONC children
    pub fn multi_line_value(self, expected: &str) -> Self {
        let actual = self.doc.get_multi_line_value(self.id);
        assert_text("multi-line value", &actual, expected, &self.context);
        self
    }

    pub fn level(self, expected: i32) -> Self {
        let actual = self.doc.element(self.id).level();
        assert_eq!(
            actual, expected,
            "{}: Expected level {}, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the number of children, continuation lines included
    pub fn child_count(self, expected: usize) -> Self {
        let children = self.doc.element(self.id).children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(self.doc, children)
        );
        self
    }

    /// Assert on a child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let children = self.doc.element(self.id).children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(ElementAssertion {
            doc: self.doc,
            id: children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

fn summarize(doc: &Gedcom, ids: &[ElementId]) -> String {
    ids.iter()
        .map(|id| doc.element(*id).tag())
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_text(field: &str, actual: &str, expected: &str, context: &str) {
    assert_eq!(
        actual, expected,
        "{}: Expected {} '{}', but got '{}'",
        context, field, expected, actual
    );
}
