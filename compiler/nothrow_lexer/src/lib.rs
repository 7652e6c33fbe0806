//! Cooked lexer for nothrow.
//!
//! Wraps the raw scanner from `nothrow_lexer_core` with keyword resolution
//! and trivia filtering. Token identity is always derived from the source
//! spelling at scan time: a raw `Ident` whose text is `volatile` cooks to
//! [`Keyword::Volatile`](nothrow_ir::Keyword::Volatile), whatever a semantic
//! front end might have recorded for that location.
//!
//! - [`TokenStream`] scans lazily from any offset and can be restarted.
//! - [`lex`] cooks a whole file at once.

mod cooker;
pub mod keywords;
mod stream;

use nothrow_ir::Token;
use nothrow_lexer_core::SourceBuffer;

pub use stream::TokenStream;

/// Lex an entire source buffer. The last token is always `Eof`.
pub fn lex(source: &SourceBuffer) -> Vec<Token> {
    TokenStream::new(source, 0).collect()
}

#[cfg(test)]
mod tests;
