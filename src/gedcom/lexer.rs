//! Line lexer for GEDCOM text
//!
//! Lexing happens in two steps:
//! 1. [`physical_lines`] splits the source on CR, LF or CRLF terminators and
//!    strips a leading byte-order mark.
//! 2. [`tokenize_line`] scans one physical line with the logos [`Token`] enum and
//!    produces a [`LineToken`] (level, pointer, tag, value).
//!
//! The lexer knows nothing about the tree; nesting is the parser's job.

pub mod lexer_impl;
pub mod lines;
pub mod tokens;

pub use lexer_impl::{tokenize_line, LineToken};
pub use lines::{physical_lines, PhysicalLines};
pub use tokens::Token;
