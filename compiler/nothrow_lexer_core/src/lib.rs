//! Low-level raw scanner for C-family source text.
//!
//! This crate turns bytes into `(RawTag, len)` pairs and nothing more:
//! no keyword resolution, no preprocessor, no symbol table. Identifier-like
//! spellings are always [`RawTag::Ident`]; deciding what an identifier *is*
//! belongs to the cooking layer (`nothrow_lexer`).
//!
//! ```text
//! &str -> SourceBuffer -> Cursor -> RawScanner -> RawToken { tag, len }
//! ```
//!
//! Scanning can begin at any byte offset via [`SourceBuffer::cursor_at`],
//! which is what lets callers re-scan a small region of an already-parsed
//! file without lexing it from the top.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
