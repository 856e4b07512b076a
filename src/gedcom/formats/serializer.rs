//! GEDCOM text serializer
//!
//! Writes `LEVEL [POINTER] TAG [VALUE]` lines in pre-order. A value that holds
//! line breaks or would overflow the line limit is written as the element's own
//! line followed by synthetic CONT/CONC lines, using the same splitting rule as
//! `Gedcom::set_multi_line_value`. Those lines come before the element's
//! children.

use crate::gedcom::ast::multiline::split_value;
use crate::gedcom::ast::{ElementId, Gedcom, GedcomError};
use crate::gedcom::formats::LineTerminator;
use std::io::{self, Write};

impl Gedcom {
    /// Render the element (and its subtree if `recursive`) as GEDCOM text
    ///
    /// For the root only its children are rendered.
    pub fn to_gedcom_string(&self, id: ElementId, recursive: bool) -> String {
        render_with(self, id, recursive, LineTerminator::Lf)
    }

    /// Write the whole document with LF terminators
    pub fn save_gedcom<W: Write>(&self, writer: W) -> Result<(), GedcomError> {
        self.save_gedcom_with(writer, LineTerminator::Lf)
    }

    pub fn save_gedcom_with<W: Write>(
        &self,
        mut writer: W,
        terminator: LineTerminator,
    ) -> Result<(), GedcomError> {
        writer.write_all(render_with(self, ElementId::ROOT, true, terminator).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the whole document to stdout
    pub fn print_gedcom(&self) -> Result<(), GedcomError> {
        self.save_gedcom(io::stdout().lock())
    }
}

/// Render with an explicit line terminator
pub fn render_with(
    doc: &Gedcom,
    id: ElementId,
    recursive: bool,
    terminator: LineTerminator,
) -> String {
    let mut out = String::new();
    if doc.element(id).is_root() {
        if recursive {
            for &child in doc.element(id).children() {
                write_element(doc, child, true, terminator, &mut out);
            }
        }
    } else {
        write_element(doc, id, recursive, terminator, &mut out);
    }
    out
}

fn write_element(
    doc: &Gedcom,
    id: ElementId,
    recursive: bool,
    terminator: LineTerminator,
    out: &mut String,
) {
    let element = doc.element(id);
    let head = element.head();
    let eol = terminator.as_str();
    let child_level = element.level() + 1;

    let fragments = split_value(head.chars().count(), child_level, eol.len(), element.value());
    for fragment in fragments {
        match fragment.tag {
            None => write_line(out, &head, &fragment.text, eol),
            Some(tag) => write_line(out, &format!("{} {}", child_level, tag), &fragment.text, eol),
        }
    }

    if recursive {
        for &child in element.children() {
            write_element(doc, child, true, terminator, out);
        }
    }
}

fn write_line(out: &mut String, head: &str, value: &str, terminator: &str) {
    out.push_str(head);
    if !value.is_empty() {
        out.push(' ');
        out.push_str(value);
    }
    out.push_str(terminator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::parser::{parse_str, ParseOptions};

    const SOURCE: &str = "0 HEAD\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME John /Doe/\n2 CONC  Jr\n1 SEX M\n0 TRLR\n";

    #[test]
    fn test_document_round_trips_verbatim() {
        let doc = parse_str(SOURCE, ParseOptions::strict()).unwrap();
        assert_eq!(doc.to_gedcom_string(ElementId::ROOT, true), SOURCE);
    }

    #[test]
    fn test_non_recursive_renders_one_line() {
        let doc = parse_str(SOURCE, ParseOptions::strict()).unwrap();
        let indi = doc.find("@I1@").unwrap();
        assert_eq!(doc.to_gedcom_string(indi, false), "0 @I1@ INDI\n");
        assert_eq!(doc.to_gedcom_string(ElementId::ROOT, false), "");
    }

    #[test]
    fn test_programmatic_multi_line_value_is_split() {
        let mut doc = Gedcom::new();
        let note = doc.new_child_element(ElementId::ROOT, "NOTE", "@N1@", "");
        doc.set_value(note, "line one\nline two");
        assert_eq!(
            doc.to_gedcom_string(note, true),
            "0 @N1@ NOTE line one\n1 CONT line two\n"
        );
    }

    #[test]
    fn test_crlf_output() {
        let doc = parse_str(SOURCE, ParseOptions::strict()).unwrap();
        let mut out = Vec::new();
        doc.save_gedcom_with(&mut out, LineTerminator::CrLf).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("0 HEAD\r\n1 CHAR UTF-8\r\n"));
        assert_eq!(text.matches("\r\n").count(), 7);
    }

    #[test]
    fn test_save_gedcom_matches_string() {
        let doc = parse_str(SOURCE, ParseOptions::strict()).unwrap();
        let mut out = Vec::new();
        doc.save_gedcom(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SOURCE);
    }
}
