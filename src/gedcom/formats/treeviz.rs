//! Treeviz formatter for element trees

use crate::gedcom::ast::{ElementId, Gedcom};

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Outline of the subtree at `id`; for the root, one tree per record
pub fn to_treeviz_str(doc: &Gedcom, id: ElementId) -> String {
    let mut result = String::new();
    if doc.element(id).is_root() {
        append_children(&mut result, doc, doc.element(id).children(), "");
    } else {
        append_element(&mut result, doc, id, "", true);
    }
    result
}

fn label(doc: &Gedcom, id: ElementId) -> String {
    let element = doc.element(id);
    let mut label = element.tag().to_string();
    if element.has_pointer() {
        label.push(' ');
        label.push_str(element.pointer());
    }
    if !element.value().is_empty() {
        label.push_str(": ");
        label.push_str(&truncate(element.value(), MAX_LABEL_CHARS));
    }
    label
}

fn append_element(result: &mut String, doc: &Gedcom, id: ElementId, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, label(doc, id)));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, doc, doc.element(id).children(), &new_prefix);
}

fn append_children(result: &mut String, doc: &Gedcom, children: &[ElementId], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_element(result, doc, *child, prefix, is_last);
    }
}
