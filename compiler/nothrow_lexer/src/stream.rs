//! Lazy, restartable stream of cooked tokens.

use nothrow_ir::{Span, Token, TokenKind};
use nothrow_lexer_core::{RawScanner, SourceBuffer};

use crate::cooker;

/// Trivia-free token stream starting at an arbitrary byte offset.
///
/// Yields every significant token up to end of input, then exactly one
/// [`TokenKind::Eof`] token (a point span at the end of the source), then
/// `None`. Cloning the stream snapshots its position, and two streams created
/// at the same offset over the same buffer yield the same tokens.
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    scanner: RawScanner<'src>,
    finished: bool,
}

impl<'src> TokenStream<'src> {
    /// Create a stream starting at byte offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of the source.
    pub fn new(source: &'src SourceBuffer, start: u32) -> Self {
        TokenStream {
            scanner: RawScanner::new(source.cursor_at(start)),
            finished: false,
        }
    }

    /// Byte offset where the next raw token starts (trivia included).
    #[inline]
    pub fn pos(&self) -> u32 {
        self.scanner.pos()
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let end = start + raw.len;
            if raw.tag.is_trivia() {
                continue;
            }
            let kind = cooker::cook(raw.tag, self.scanner.slice(start, end));
            if kind == TokenKind::Eof {
                self.finished = true;
            }
            return Some(Token::new(kind, Span::new(start, end)));
        }
    }
}

impl std::iter::FusedIterator for TokenStream<'_> {}

#[cfg(test)]
mod tests;
