//! Token definitions for a single GEDCOM line
//!
//! The line grammar is `LEVEL SP (POINTER SP)? TAG (SP VALUE)?`. Only the
//! structural prefix is tokenized; the value is sliced from the source line by
//! span so that it stays verbatim.
use logos::Logos;

/// Tokens of the structural prefix of a GEDCOM line
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    // Level numbers; also valid as an all-digit tag
    #[regex(r"[0-9]+", priority = 3)]
    Digits,

    // Cross-reference identifier, e.g. @I1@
    #[regex(r"@[^@]+@")]
    Pointer,

    #[token(" ")]
    Space,

    // Tag mnemonics, including vendor tags like _MREL
    #[regex(r"[A-Za-z0-9_]+", priority = 2)]
    Word,
}

impl Token {
    /// Check if this token can serve as a tag
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::Word | Token::Digits)
    }
}
