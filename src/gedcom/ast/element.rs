//! A single GEDCOM line and its position in the tree

use crate::gedcom::ast::kind::RecordKind;
use crate::gedcom::tags;
use serde::Serialize;
use std::fmt;

/// Handle of an element inside its document's arena
///
/// Handles are only meaningful for the document that produced them and are
/// never reused, even after the element is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// The synthetic root of every document
    pub const ROOT: ElementId = ElementId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One GEDCOM record line
///
/// `level` is the declared depth (0 for top-level records, -1 for the root).
/// `pointer` and `value` are empty when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    level: i32,
    pointer: String,
    tag: String,
    value: String,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl Element {
    /// Create a detached element; attach it with `Gedcom::add_child_element`
    pub fn new(
        level: i32,
        pointer: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Element {
            level,
            pointer: pointer.into(),
            tag: tag.into(),
            value: value.into(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub(crate) fn root() -> Self {
        Element::new(-1, "", tags::ROOT, "")
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The single-line value as declared; see `Gedcom::get_multi_line_value`
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn has_pointer(&self) -> bool {
        !self.pointer.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.level < 0
    }

    /// CONC and CONT lines are children but carry no meaning of their own
    pub fn is_continuation(&self) -> bool {
        tags::is_continuation(&self.tag)
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::of_tag(&self.tag)
    }

    pub(crate) fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ElementId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ElementId> {
        &mut self.children
    }

    /// Render the element's own line without value or terminator
    pub(crate) fn head(&self) -> String {
        if self.pointer.is_empty() {
            format!("{} {}", self.level, self.tag)
        } else {
            format!("{} {} {}", self.level, self.pointer, self.tag)
        }
    }
}
