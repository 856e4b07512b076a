//! Flattened element list and pointer dictionary

use crate::gedcom::ast::document::Gedcom;
use crate::gedcom::ast::element::ElementId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Snapshot of a document's elements, built by one pre-order walk
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    list: Vec<ElementId>,
    dictionary: HashMap<String, ElementId>,
}

impl ElementIndex {
    pub(crate) fn build(doc: &Gedcom) -> Self {
        let list = doc.descendants(ElementId::ROOT);
        let mut dictionary = HashMap::new();
        for &id in &list {
            let element = doc.element(id);
            if !element.has_pointer() {
                continue;
            }
            if dictionary
                .insert(element.pointer().to_string(), id)
                .is_some()
            {
                warn!(pointer = element.pointer(), "duplicate pointer, keeping the later record");
            }
        }
        debug!(
            elements = list.len(),
            pointers = dictionary.len(),
            "built element index"
        );
        ElementIndex { list, dictionary }
    }

    /// All elements below the root in file order
    pub fn list(&self) -> &[ElementId] {
        &self.list
    }

    pub fn dictionary(&self) -> &HashMap<String, ElementId> {
        &self.dictionary
    }
}
