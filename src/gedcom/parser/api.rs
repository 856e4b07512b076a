//! Public parsing entry points

use crate::gedcom::ast::{Gedcom, GedcomError};
use crate::gedcom::lexer::physical_lines;
use crate::gedcom::parser::builder::TreeBuilder;
use crate::gedcom::parser::options::ParseOptions;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Parse GEDCOM text
///
/// On failure no document is returned; the error names the offending line.
pub fn parse_str(source: &str, options: ParseOptions) -> Result<Gedcom, GedcomError> {
    let mut builder = TreeBuilder::new(options);
    for (line_number, line) in physical_lines(source) {
        builder.push_line(line_number, line)?;
    }
    Ok(builder.finish())
}

/// Parse raw bytes, which must be UTF-8 (optionally with a byte-order mark)
pub fn parse_bytes(bytes: &[u8], options: ParseOptions) -> Result<Gedcom, GedcomError> {
    let source = std::str::from_utf8(bytes).map_err(|err| GedcomError::Encoding {
        line: terminators(&bytes[..err.valid_up_to()]) + 1,
    })?;
    parse_str(source, options)
}

/// Line terminators in `bytes`, counting CR, LF and CRLF once each
fn terminators(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .enumerate()
        .filter(|&(index, &byte)| match byte {
            b'\r' => true,
            b'\n' => index == 0 || bytes[index - 1] != b'\r',
            _ => false,
        })
        .count()
}

/// Read everything from `reader` and parse it
pub fn parse_reader<R: Read>(mut reader: R, options: ParseOptions) -> Result<Gedcom, GedcomError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes(&bytes, options)
}

/// Parse the file at `path`; the file is closed before this returns
pub fn parse_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Gedcom, GedcomError> {
    let path = path.as_ref();
    let doc = parse_reader(File::open(path)?, options)?;
    info!(
        path = %path.display(),
        records = doc.get_root_child_elements().len(),
        strict = options.strict,
        "parsed GEDCOM file"
    );
    Ok(doc)
}
