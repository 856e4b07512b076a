//! Serde view of an element tree
//!
//! The arena is flattened into nested [`ElementNode`] values so that JSON and
//! YAML output reads like the GEDCOM hierarchy.

use crate::gedcom::ast::{ElementId, Gedcom, RecordKind};
use serde::Serialize;

/// One element with its children inlined
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    pub level: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pointer: String,
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "is_generic")]
    pub kind: RecordKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

fn is_generic(kind: &RecordKind) -> bool {
    *kind == RecordKind::Generic
}

impl ElementNode {
    pub fn from_element(doc: &Gedcom, id: ElementId) -> Self {
        let element = doc.element(id);
        ElementNode {
            level: element.level(),
            pointer: element.pointer().to_string(),
            tag: element.tag().to_string(),
            value: element.value().to_string(),
            kind: element.kind(),
            children: element
                .children()
                .iter()
                .map(|child| ElementNode::from_element(doc, *child))
                .collect(),
        }
    }
}

/// Nodes for the subtree at `id`; for the root, one node per record
pub fn to_nodes(doc: &Gedcom, id: ElementId) -> Vec<ElementNode> {
    let element = doc.element(id);
    if element.is_root() {
        element
            .children()
            .iter()
            .map(|child| ElementNode::from_element(doc, *child))
            .collect()
    } else {
        vec![ElementNode::from_element(doc, id)]
    }
}

pub fn to_json_string(doc: &Gedcom, id: ElementId) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_nodes(doc, id))
}

pub fn to_yaml_string(doc: &Gedcom, id: ElementId) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&to_nodes(doc, id))
}
