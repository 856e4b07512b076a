//! Tokenization of one physical GEDCOM line
//!
//! The logos lexer scans the structural prefix (level, optional pointer, tag).
//! Everything after the single space that follows the tag is the value, taken
//! verbatim from the source line.

use crate::gedcom::ast::GedcomError;
use crate::gedcom::lexer::tokens::Token;
use logos::Logos;

/// The fields of one GEDCOM line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken<'a> {
    pub level: i32,
    pub pointer: &'a str,
    pub tag: &'a str,
    pub value: &'a str,
}

/// Tokenize a single line (without its terminator)
///
/// `line_number` is 1-based and only used for error reporting.
pub fn tokenize_line(line_number: usize, line: &str) -> Result<LineToken<'_>, GedcomError> {
    let malformed = |reason: &str| GedcomError::MalformedLine {
        line: line_number,
        text: line.to_string(),
        reason: reason.to_string(),
    };

    let mut lexer = Token::lexer(line);

    let level = match lexer.next() {
        Some(Ok(Token::Digits)) => parse_level(lexer.slice()).ok_or_else(|| {
            malformed("level must be one or two digits without a leading zero")
        })?,
        None => return Err(malformed("empty line")),
        _ => return Err(malformed("line must start with a level number")),
    };

    if lexer.next() != Some(Ok(Token::Space)) {
        return Err(malformed("expected a single space after the level"));
    }

    let mut pointer = "";
    let tag = match lexer.next() {
        Some(Ok(Token::Pointer)) => {
            pointer = lexer.slice();
            if lexer.next() != Some(Ok(Token::Space)) {
                return Err(malformed("expected a single space after the pointer"));
            }
            match lexer.next() {
                Some(Ok(token)) if token.is_tag() => lexer.slice(),
                _ => return Err(malformed("expected a tag after the pointer")),
            }
        }
        Some(Ok(token)) if token.is_tag() => lexer.slice(),
        _ => return Err(malformed("expected a pointer or a tag")),
    };

    let value = match lexer.next() {
        None => "",
        Some(Ok(Token::Space)) => &line[lexer.span().end..],
        _ => return Err(malformed("tag must be followed by a space or the end of the line")),
    };

    Ok(LineToken {
        level,
        pointer,
        tag,
        value,
    })
}

fn parse_level(digits: &str) -> Option<i32> {
    if digits.len() > 2 || (digits.len() == 2 && digits.starts_with('0')) {
        return None;
    }
    digits.parse().ok()
}
