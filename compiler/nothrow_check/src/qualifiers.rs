//! Trailing qualifier skipping.
//!
//! Between a parameter list's `)` and the place an exception specification
//! goes, C++ allows cv- and ref-qualifiers in any order:
//!
//! ```text
//! int Widget::size() const &  noexcept
//!                   ^^^^^^^^ skipped
//! ```

use nothrow_ir::{Keyword, Token, TokenKind};

/// `&`, `&&`, `const`, `volatile`, `restrict` (any spelling of them).
#[inline]
pub fn is_trailing_qualifier(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Amp
            | TokenKind::AmpAmp
            | TokenKind::Keyword(Keyword::Const | Keyword::Volatile | Keyword::Restrict)
    )
}

/// Advance past leading qualifier tokens.
///
/// `tokens` must start at byte offset `start`. Returns the end of the last
/// qualifier consumed, or `start` when the first token is not a qualifier.
/// Running out of tokens is not an error: the last recorded offset stands.
pub fn skip_qualifiers<I>(tokens: I, start: u32) -> u32
where
    I: IntoIterator<Item = Token>,
{
    let mut offset = start;
    for token in tokens {
        if !is_trailing_qualifier(token.kind) {
            break;
        }
        debug_assert!(
            token.end() > offset,
            "qualifier {:?} ending at {} does not advance past {offset}",
            token.kind,
            token.end(),
        );
        offset = token.end();
    }
    offset
}
