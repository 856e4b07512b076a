//! Tree reconstruction from level-annotated lines
//!
//! The builder keeps the chain of open ancestors: `open[0]` is the root (level
//! -1) and `open[n]` is the most recent element at level `n - 1`. A line at
//! level `L` attaches under `open[L]`. A level deeper than the chain allows is
//! a structural error in strict mode; lenient mode clamps it under the most
//! recent element.

use crate::gedcom::ast::{Element, ElementId, Gedcom, GedcomError};
use crate::gedcom::lexer::{tokenize_line, LineToken};
use crate::gedcom::parser::options::ParseOptions;
use crate::gedcom::tags;
use tracing::debug;

/// Incremental builder fed one physical line at a time
#[derive(Debug)]
pub struct TreeBuilder {
    doc: Gedcom,
    open: Vec<ElementId>,
    options: ParseOptions,
}

impl TreeBuilder {
    pub fn new(options: ParseOptions) -> Self {
        TreeBuilder {
            doc: Gedcom::new(),
            open: vec![ElementId::ROOT],
            options,
        }
    }

    /// Feed one physical line (without terminator)
    pub fn push_line(&mut self, line_number: usize, line: &str) -> Result<(), GedcomError> {
        if !self.options.strict && line.trim().is_empty() {
            debug!(line = line_number, "skipping blank line");
            return Ok(());
        }

        match tokenize_line(line_number, line) {
            Ok(token) => self.push_token(line_number, token),
            Err(err) if self.options.strict => Err(err),
            Err(err) => self.push_bare_continuation(line_number, line, err),
        }
    }

    fn push_token(&mut self, line_number: usize, token: LineToken<'_>) -> Result<(), GedcomError> {
        // `open.len() - 1` is one past the deepest open level
        let depth = token.level as usize;
        let level = if depth < self.open.len() {
            token.level
        } else if self.options.strict {
            return Err(GedcomError::Structural {
                line: line_number,
                reason: format!(
                    "level {} jumps more than one level below level {}",
                    token.level,
                    self.open.len() as i32 - 2
                ),
            });
        } else {
            let clamped = self.open.len() as i32 - 1;
            debug!(
                line = line_number,
                declared = token.level,
                clamped,
                "clamping level jump"
            );
            clamped
        };

        self.attach(Element::new(level, token.pointer, token.tag, token.value));
        Ok(())
    }

    /// Fold a line that is not a GEDCOM line into the most recent element
    fn push_bare_continuation(
        &mut self,
        line_number: usize,
        line: &str,
        err: GedcomError,
    ) -> Result<(), GedcomError> {
        let Some(&last) = self.open.last().filter(|id| **id != ElementId::ROOT) else {
            return Err(err);
        };

        let last = self.doc.element(last);
        let (level, tag) = if last.is_continuation() {
            let tag = if last.tag() == tags::CONT {
                tags::CONT
            } else {
                tags::CONC
            };
            (last.level(), tag)
        } else {
            (last.level() + 1, tags::CONC)
        };

        debug!(
            line = line_number,
            tag, "treating malformed line as an implicit continuation"
        );
        self.attach(Element::new(level, "", tag, line));
        Ok(())
    }

    fn attach(&mut self, element: Element) {
        let depth = element.level() as usize;
        let parent = self.open[depth];
        let id = self.doc.attach_parsed(parent, element);
        self.open.truncate(depth + 1);
        self.open.push(id);
    }

    /// Finish building and hand over the document
    pub fn finish(self) -> Gedcom {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::testing::assert_tree;

    fn build(lines: &[&str], options: ParseOptions) -> Result<Gedcom, GedcomError> {
        let mut builder = TreeBuilder::new(options);
        for (index, line) in lines.iter().enumerate() {
            builder.push_line(index + 1, line)?;
        }
        Ok(builder.finish())
    }

    #[test]
    fn test_nesting_follows_levels() {
        let doc = build(
            &[
                "0 @I1@ INDI",
                "1 NAME John /Doe/",
                "2 GIVN John",
                "1 SEX M",
                "0 TRLR",
            ],
            ParseOptions::strict(),
        )
        .unwrap();

        assert_tree(&doc).record_count(2).record(0, |indi| {
            indi.tag("INDI").pointer("@I1@").child_count(2).child(0, |name| {
                name.tag("NAME")
                    .value("John /Doe/")
                    .child(0, |givn| {
                        givn.tag("GIVN").level(2).value("John");
                    });
            });
        });
    }

    #[test]
    fn test_strict_rejects_level_jump() {
        let err = build(&["0 @I1@ INDI", "2 DATE 1850"], ParseOptions::strict()).unwrap_err();
        match err {
            GedcomError::Structural { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Structural, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rejects_first_line_above_zero() {
        let err = build(&["1 NAME John"], ParseOptions::strict()).unwrap_err();
        assert!(matches!(err, GedcomError::Structural { line: 1, .. }));
    }

    #[test]
    fn test_lenient_clamps_level_jump() {
        let doc = build(
            &["0 @I1@ INDI", "1 BIRT", "3 DATE 1850", "1 SEX F"],
            ParseOptions::lenient(),
        )
        .unwrap();

        assert_tree(&doc).record(0, |indi| {
            indi.child_count(2).child(0, |birt| {
                birt.tag("BIRT").child(0, |date| {
                    date.tag("DATE").level(2).value("1850");
                });
            });
        });
    }

    #[test]
    fn test_lenient_folds_bare_line_into_conc() {
        let doc = build(
            &["0 @N1@ NOTE This note was broken", "by the exporter"],
            ParseOptions::lenient(),
        )
        .unwrap();

        assert_tree(&doc).record(0, |note| {
            note.child_count(1)
                .multi_line_value("This note was brokenby the exporter")
                .child(0, |conc| {
                    conc.tag("CONC").level(1).value("by the exporter");
                });
        });
    }

    #[test]
    fn test_conc_line_continues_name_without_space() {
        let doc = build(
            &["0 @I1@ INDI", "1 NAME John /Doe/", "2 CONC is the remainder"],
            ParseOptions::strict(),
        )
        .unwrap();

        assert_tree(&doc).record(0, |indi| {
            indi.child(0, |name| {
                name.tag("NAME")
                    .value("John /Doe/")
                    .child_count(1)
                    .multi_line_value("John /Doe/is the remainder");
            });
        });
    }

    #[test]
    fn test_lenient_bare_line_after_continuation_is_a_sibling() {
        let doc = build(
            &["0 @N1@ NOTE First", "1 CONT Second", "Third"],
            ParseOptions::lenient(),
        )
        .unwrap();

        assert_tree(&doc).record(0, |note| {
            note.child_count(2)
                .child(0, |cont| {
                    cont.tag("CONT").value("Second");
                })
                .child(1, |repair| {
                    repair.tag("CONT").level(1).value("Third");
                });
        });
    }

    #[test]
    fn test_strict_rejects_bare_line() {
        let err = build(&["0 @N1@ NOTE First", "Second"], ParseOptions::strict()).unwrap_err();
        assert!(matches!(err, GedcomError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_bare_line_without_predecessor_fails_in_both_modes() {
        for options in [ParseOptions::strict(), ParseOptions::lenient()] {
            let err = build(&["garbage"], options).unwrap_err();
            assert!(matches!(err, GedcomError::MalformedLine { line: 1, .. }));
        }
    }

    #[test]
    fn test_blank_lines() {
        assert!(build(&["0 HEAD", "", "0 TRLR"], ParseOptions::strict()).is_err());
        let doc = build(&["0 HEAD", "  ", "0 TRLR"], ParseOptions::lenient()).unwrap();
        assert_eq!(doc.get_root_child_elements().len(), 2);
    }
}
