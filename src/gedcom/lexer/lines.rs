//! Physical line splitting
//!
//! GEDCOM files in the wild use LF, CRLF and bare CR terminators, sometimes
//! mixed within one file. The final line may lack a terminator.

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Iterator over `(line_number, line)` pairs, line numbers starting at 1
#[derive(Debug, Clone)]
pub struct PhysicalLines<'a> {
    rest: &'a str,
    line_number: usize,
}

/// Split `source` into physical lines, stripping a leading byte-order mark
pub fn physical_lines(source: &str) -> PhysicalLines<'_> {
    PhysicalLines {
        rest: source.strip_prefix(BYTE_ORDER_MARK).unwrap_or(source),
        line_number: 0,
    }
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.line_number += 1;

        let line = match self.rest.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if self.rest[end..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                let line = &self.rest[..end];
                self.rest = &self.rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };

        Some((self.line_number, line))
    }
}
