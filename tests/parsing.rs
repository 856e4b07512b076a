//! Parsing sample files in strict and lenient mode

use gedcom::{parse_file, parse_str, ElementId, Gedcom, GedcomError, ParseOptions, RecordKind};

const FAMILY: &str = "tests/files/family.ged";
const LENIENT: &str = "tests/files/lenient.ged";

fn tags_of(doc: &Gedcom, ids: &[ElementId]) -> Vec<String> {
    ids.iter().map(|id| doc.element(*id).tag().to_string()).collect()
}

#[test]
fn test_family_file_records() {
    let doc = parse_file(FAMILY, ParseOptions::strict()).unwrap();
    let records = doc.get_root_child_elements();
    assert_eq!(
        tags_of(&doc, records),
        vec!["HEAD", "INDI", "INDI", "INDI", "INDI", "INDI", "INDI", "FAM", "FAM", "FAM", "NOTE", "OBJE", "TRLR"]
    );
    assert_eq!(doc.individuals().count(), 6);
    assert_eq!(doc.families().count(), 3);
    assert_eq!(doc.records_of_kind(RecordKind::Object).count(), 1);
}

#[test]
fn test_every_pointer_is_indexed() {
    let doc = parse_file(FAMILY, ParseOptions::strict()).unwrap();
    let dictionary = doc.get_element_dictionary();
    for pointer in ["@I1@", "@I6@", "@F1@", "@F3@", "@N1@", "@O1@"] {
        let id = dictionary[pointer];
        assert_eq!(doc.element(id).pointer(), pointer);
    }
    assert_eq!(dictionary.len(), 11);
    assert_eq!(doc.get_element_list().len(), doc.descendants(ElementId::ROOT).len());
}

#[test]
fn test_levels_and_parents_agree() {
    let doc = parse_file(FAMILY, ParseOptions::strict()).unwrap();
    for &id in doc.get_element_list() {
        let element = doc.element(id);
        let parent = doc.element(element.parent().unwrap());
        assert_eq!(element.level(), parent.level() + 1);
    }
}

#[test]
fn test_multi_line_note() {
    let doc = parse_file(FAMILY, ParseOptions::strict()).unwrap();
    let note = doc.find("@N1@").unwrap();
    assert_eq!(
        doc.get_multi_line_value(note),
        "Alice kept a diary\nfrom 1912 until her death, now held by the family."
    );
}

#[test]
fn test_lenient_file_rejected_in_strict_mode() {
    let err = parse_file(LENIENT, ParseOptions::strict()).unwrap_err();
    assert!(matches!(err, GedcomError::Structural { line: 5, .. }));
}

#[test]
fn test_lenient_file_is_repaired() {
    let doc = parse_file(LENIENT, ParseOptions::lenient()).unwrap();
    let person = doc.find("@I1@").unwrap();

    let name = doc.children_with_tag(person, "NAME").next().unwrap();
    let date = doc.children_with_tag(name, "DATE").next().unwrap();
    assert_eq!(doc.element(date).level(), 2);
    assert_eq!(doc.element(date).value(), "1850");

    let note = doc.children_with_tag(person, "NOTE").next().unwrap();
    assert_eq!(
        doc.get_multi_line_value(note),
        "A note that waswrapped by a careless editor"
    );
}

#[test]
fn test_line_terminators_are_interchangeable() {
    let lf = parse_str("0 HEAD\n1 CHAR UTF-8\n0 TRLR\n", ParseOptions::strict()).unwrap();
    let crlf = parse_str("0 HEAD\r\n1 CHAR UTF-8\r\n0 TRLR\r\n", ParseOptions::strict()).unwrap();
    let cr = parse_str("0 HEAD\r1 CHAR UTF-8\r0 TRLR\r", ParseOptions::strict()).unwrap();
    for doc in [&lf, &crlf, &cr] {
        assert_eq!(doc.get_element_list().len(), 3);
        let head = doc.get_root_child_elements()[0];
        assert_eq!(doc.child_value(head, "CHAR"), Some("UTF-8"));
    }
}

#[test]
fn test_malformed_line_reports_line_number() {
    let err = parse_str("0 HEAD\n1CHAR UTF-8\n", ParseOptions::strict()).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(matches!(err, GedcomError::MalformedLine { .. }));
}

#[test]
fn test_missing_file() {
    let err = parse_file("tests/files/missing.ged", ParseOptions::strict()).unwrap_err();
    assert!(matches!(err, GedcomError::Io(_)));
}
