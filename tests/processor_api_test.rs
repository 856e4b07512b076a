//! Tests for the processor API and configuration layering

use gedcom::gedcom::processor::{process_file, ProcessingError, ProcessingSpec};
use gedcom::{GedcomError, LineTerminator, Loader, OutputFormat};
use std::fs;

#[test]
fn test_processing_spec_parsing() {
    for format in OutputFormat::all() {
        let spec = ProcessingSpec::from_string(format.name()).unwrap();
        assert_eq!(spec.format, *format);
    }
    assert!(ProcessingSpec::from_string("ast-tag").is_err());
}

#[test]
fn test_process_gedcom_output_matches_source() {
    let spec = ProcessingSpec::from_string("gedcom").unwrap();
    let output = process_file("tests/files/family.ged", &spec).unwrap();
    let source = fs::read_to_string("tests/files/family.ged").unwrap();
    assert_eq!(output, source);
}

#[test]
fn test_process_treeviz() {
    let spec = ProcessingSpec::from_string("treeviz").unwrap();
    let output = process_file("tests/files/family.ged", &spec).unwrap();
    assert!(output.starts_with("├─ HEAD\n"));
    assert!(output.contains("├─ INDI @I1@\n"));
    assert!(output.ends_with("└─ TRLR\n"));
}

#[test]
fn test_process_yaml() {
    let spec = ProcessingSpec::from_string("yaml").unwrap();
    let output = process_file("tests/files/cyclic.ged", &spec).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(value[1]["pointer"].as_str(), Some("@I1@"));
    assert_eq!(value[1]["kind"].as_str(), Some("individual"));
}

#[test]
fn test_lenient_file_needs_lenient_config() {
    let strict = ProcessingSpec::from_config(&Loader::new().build().unwrap());
    let err = process_file("tests/files/lenient.ged", &strict).unwrap_err();
    assert!(matches!(
        err,
        ProcessingError::Parse(GedcomError::Structural { line: 5, .. })
    ));

    let config = Loader::new()
        .set_override("parsing.strict", false)
        .unwrap()
        .build()
        .unwrap();
    let lenient = ProcessingSpec::from_config(&config);
    let output = process_file("tests/files/lenient.ged", &lenient).unwrap();
    assert!(output.contains("2 DATE 1850\n"));
    assert!(output.contains("2 CONC wrapped by a careless editor\n"));
}

#[test]
fn test_config_file_layering() {
    let dir = std::env::temp_dir().join(format!("gedcom-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("gedcom.toml");
    fs::write(&path, "[output]\nformat = \"json\"\nline_terminator = \"crlf\"\n").unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.line_terminator, LineTerminator::CrLf);
    assert!(config.parsing.strict);

    fs::remove_dir_all(&dir).unwrap();
}
