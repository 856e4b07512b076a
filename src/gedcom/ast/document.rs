//! The element arena and its cached index
//!
//! A [`Gedcom`] owns every element of one document. The flattened element list
//! and the pointer dictionary are computed lazily on first access and then
//! reused. Tree edits do not refresh them: an edit only marks the cache stale,
//! and callers must call [`Gedcom::invalidate_cache`] before relying on list or
//! dictionary queries again.

use crate::gedcom::ast::element::{Element, ElementId};
use crate::gedcom::ast::index::ElementIndex;
use crate::gedcom::tags;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::debug;

/// A parsed (or programmatically built) GEDCOM document
#[derive(Debug, Clone)]
pub struct Gedcom {
    elements: Vec<Element>,
    index: OnceCell<ElementIndex>,
    cache_stale: bool,
}

impl Default for Gedcom {
    fn default() -> Self {
        Self::new()
    }
}

impl Gedcom {
    /// An empty document holding only the synthetic root
    pub fn new() -> Self {
        Gedcom {
            elements: vec![Element::root()],
            index: OnceCell::new(),
            cache_stale: false,
        }
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Borrow an element by handle
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this document.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_root_element(&self) -> &Element {
        self.element(ElementId::ROOT)
    }

    /// The top-level records in file order
    pub fn get_root_child_elements(&self) -> &[ElementId] {
        self.get_root_element().children()
    }

    /// Children of `id` other than CONC/CONT continuation lines
    pub fn substantive_children(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.element(id)
            .children()
            .iter()
            .copied()
            .filter(move |child| !self.element(*child).is_continuation())
    }

    /// Substantive children of `id` carrying `tag`, in declaration order
    pub fn children_with_tag<'a>(
        &'a self,
        id: ElementId,
        tag: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.substantive_children(id)
            .filter(move |child| self.element(*child).tag() == tag)
    }

    /// Value of the first substantive child of `id` carrying `tag`
    pub fn child_value(&self, id: ElementId, tag: &str) -> Option<&str> {
        self.children_with_tag(id, tag)
            .next()
            .map(|child| self.element(child).value())
    }

    /// Pre-order walk of the subtree below `id`, `id` itself excluded
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.element(id).children().iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.element(next).children().iter().rev().copied());
        }
        out
    }

    // ------------------------------------------------------------------
    // Cached index
    // ------------------------------------------------------------------

    fn index(&self) -> &ElementIndex {
        if self.cache_stale && self.index.get().is_some() {
            debug!("serving element index built before the last tree edit");
        }
        self.index.get_or_init(|| ElementIndex::build(self))
    }

    /// Every element below the root in file order
    pub fn get_element_list(&self) -> &[ElementId] {
        self.index().list()
    }

    /// Pointer to element mapping; on duplicate pointers the later element wins
    pub fn get_element_dictionary(&self) -> &HashMap<String, ElementId> {
        self.index().dictionary()
    }

    /// Look up a record by its pointer, e.g. `@I1@`
    pub fn find(&self, pointer: &str) -> Option<ElementId> {
        self.get_element_dictionary().get(pointer).copied()
    }

    /// Drop the cached list and dictionary; the next query rebuilds them
    pub fn invalidate_cache(&mut self) {
        self.index.take();
        self.cache_stale = false;
    }

    /// True when the tree changed after the cached index was built
    pub fn is_cache_stale(&self) -> bool {
        self.cache_stale
    }

    fn mark_edited(&mut self) {
        if self.index.get().is_some() {
            self.cache_stale = true;
        }
    }

    // ------------------------------------------------------------------
    // Tree editing
    // ------------------------------------------------------------------

    /// Create a new element as the last child of `parent`
    pub fn new_child_element(
        &mut self,
        parent: ElementId,
        tag: &str,
        pointer: &str,
        value: &str,
    ) -> ElementId {
        let level = self.element(parent).level() + 1;
        self.add_child_element(parent, Element::new(level, pointer, tag, value))
    }

    /// Attach a detached element as the last child of `parent`
    ///
    /// The element's level is rewritten to `parent.level + 1`.
    pub fn add_child_element(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        element.set_level(self.element(parent).level() + 1);
        element.set_parent(Some(parent));
        element.children_mut().clear();
        self.elements.push(element);
        self.elements[parent.0].children_mut().push(id);
        self.mark_edited();
        id
    }

    /// Detach `child` (and its subtree) from its parent
    ///
    /// Returns false for the root or an already detached element.
    pub fn remove_child_element(&mut self, child: ElementId) -> bool {
        let Some(parent) = self.element(child).parent() else {
            return false;
        };
        self.elements[parent.0]
            .children_mut()
            .retain(|existing| *existing != child);
        self.elements[child.0].set_parent(None);
        self.mark_edited();
        true
    }

    /// Replace the single-line value of `id`, leaving its children untouched
    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.elements[id.0].set_value(value.into());
        self.mark_edited();
    }

    /// Detach every CONC/CONT child of `id`
    pub(crate) fn remove_continuations(&mut self, id: ElementId) {
        let continuations: Vec<ElementId> = self
            .element(id)
            .children()
            .iter()
            .copied()
            .filter(|child| tags::is_continuation(self.element(*child).tag()))
            .collect();
        for child in continuations {
            self.remove_child_element(child);
        }
    }

    /// Attach a child at an explicit level; used by the tree builder only
    pub(crate) fn attach_parsed(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        element.set_parent(Some(parent));
        self.elements.push(element);
        self.elements[parent.0].children_mut().push(id);
        id
    }
}
