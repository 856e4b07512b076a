//! Multi-line values spread over CONT and CONC children
//!
//! A CONT child continues the value on a new line, a CONC child appends to it
//! without a separator. The logical value is computed on demand; the children
//! stay real elements of the tree. Every newline starts a CONT, so a value
//! ending in a newline gets an empty last CONT.
//!
//! Splitting keeps every physical line within [`MAX_LINE_LENGTH`] characters,
//! counting the line head (`LEVEL [POINTER ]TAG`) with its separator space and
//! the terminator. A chunk is backed off so it does not end in spaces unless
//! it is nothing but spaces.

use crate::gedcom::ast::document::Gedcom;
use crate::gedcom::ast::element::ElementId;
use crate::gedcom::tags;

/// Longest physical line GEDCOM 5.5 allows
pub const MAX_LINE_LENGTH: usize = 255;

/// One physical piece of a logical value
///
/// `tag` is `None` for the element's own value, otherwise CONT or CONC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tag: Option<&'static str>,
    pub text: String,
}

/// Split `value` into the owner's own value followed by continuation fragments
///
/// `head_len` is the character count of the owner's head, `child_level` the
/// level continuation lines are written at.
pub fn split_value(
    head_len: usize,
    child_level: i32,
    terminator_len: usize,
    value: &str,
) -> Vec<Fragment> {
    // head, separator space, value and terminator share the limit
    let available = |head: usize| MAX_LINE_LENGTH.saturating_sub(head + 1 + terminator_len);
    // "CONT" and "CONC" have the same width
    let continuation_head = child_level.to_string().len() + 1 + tags::CONC.len();

    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let mut fragments = Vec::new();

    for (line_index, line) in normalized.split('\n').enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let (tag, head) = if line_index == 0 {
            (None, head_len)
        } else {
            (Some(tags::CONT), continuation_head)
        };

        let mut taken = bounded_length(&chars, available(head));
        fragments.push(Fragment {
            tag,
            text: chars[..taken].iter().collect(),
        });

        while taken < chars.len() {
            let length = bounded_length(&chars[taken..], available(continuation_head));
            fragments.push(Fragment {
                tag: Some(tags::CONC),
                text: chars[taken..taken + length].iter().collect(),
            });
            taken += length;
        }
    }

    fragments
}

/// Number of characters of `chars` that fit in `available`
fn bounded_length(chars: &[char], available: usize) -> usize {
    if chars.len() <= available {
        return chars.len();
    }
    let available = available.max(1);
    let trailing_spaces = chars[..available]
        .iter()
        .rev()
        .take_while(|c| **c == ' ')
        .count();
    if trailing_spaces == available {
        available
    } else {
        available - trailing_spaces
    }
}

impl Gedcom {
    /// The element's value joined with its CONT (newline) and CONC children
    pub fn get_multi_line_value(&self, id: ElementId) -> String {
        let element = self.element(id);
        let mut value = element.value().to_string();
        for &child in element.children() {
            let child = self.element(child);
            match child.tag() {
                tags::CONT => {
                    value.push('\n');
                    value.push_str(child.value());
                }
                tags::CONC => value.push_str(child.value()),
                _ => {}
            }
        }
        value
    }

    /// Replace the value of `id` and regenerate its CONT/CONC children
    ///
    /// Existing continuation children are detached. The new ones are appended
    /// after the remaining children.
    pub fn set_multi_line_value(&mut self, id: ElementId, value: &str) {
        self.remove_continuations(id);

        let element = self.element(id);
        let head_len = element.head().chars().count();
        let fragments = split_value(head_len, element.level() + 1, 1, value);

        let mut fragments = fragments.into_iter();
        let own = fragments.next().map(|fragment| fragment.text).unwrap_or_default();
        self.set_value(id, own);
        for fragment in fragments {
            if let Some(tag) = fragment.tag {
                self.new_child_element(id, tag, "", &fragment.text);
            }
        }
    }
}
