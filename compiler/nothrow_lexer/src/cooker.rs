//! Turns a raw tag plus its spelling into a [`TokenKind`].
//!
//! Punctuation maps one to one. An identifier may be an alternative operator
//! spelling (`and`, `bitor`, ...) or a keyword; everything else stays
//! `Ident`. Literal values are never parsed. The stream drops trivia before
//! cooking, so trivia and error tags only land in the fallback arm.

use nothrow_ir::TokenKind;
use nothrow_lexer_core::RawTag;

use crate::keywords;

/// Cook one non-trivia raw token. `text` is the token's source spelling.
pub(crate) fn cook(tag: RawTag, text: &str) -> TokenKind {
    match tag {
        RawTag::Ident => cook_ident(text),
        RawTag::Number => TokenKind::Number,
        RawTag::String | RawTag::RawString => TokenKind::String,
        RawTag::Char => TokenKind::Char,

        RawTag::Plus => TokenKind::Plus,
        RawTag::PlusPlus => TokenKind::PlusPlus,
        RawTag::PlusEqual => TokenKind::PlusEq,
        RawTag::Minus => TokenKind::Minus,
        RawTag::MinusMinus => TokenKind::MinusMinus,
        RawTag::MinusEqual => TokenKind::MinusEq,
        RawTag::Arrow => TokenKind::Arrow,
        RawTag::ArrowStar => TokenKind::ArrowStar,
        RawTag::Star => TokenKind::Star,
        RawTag::StarEqual => TokenKind::StarEq,
        RawTag::Slash => TokenKind::Slash,
        RawTag::SlashEqual => TokenKind::SlashEq,
        RawTag::Percent => TokenKind::Percent,
        RawTag::PercentEqual => TokenKind::PercentEq,
        RawTag::Caret => TokenKind::Caret,
        RawTag::CaretEqual => TokenKind::CaretEq,
        RawTag::Ampersand => TokenKind::Amp,
        RawTag::AmpersandAmpersand => TokenKind::AmpAmp,
        RawTag::AmpersandEqual => TokenKind::AmpEq,
        RawTag::Pipe => TokenKind::Pipe,
        RawTag::PipePipe => TokenKind::PipePipe,
        RawTag::PipeEqual => TokenKind::PipeEq,
        RawTag::Tilde => TokenKind::Tilde,
        RawTag::Bang => TokenKind::Bang,
        RawTag::BangEqual => TokenKind::BangEq,
        RawTag::Equal => TokenKind::Eq,
        RawTag::EqualEqual => TokenKind::EqEq,
        RawTag::Less => TokenKind::Lt,
        RawTag::LessEqual => TokenKind::LtEq,
        RawTag::Shl => TokenKind::Shl,
        RawTag::ShlEqual => TokenKind::ShlEq,
        RawTag::Spaceship => TokenKind::Spaceship,
        RawTag::Greater => TokenKind::Gt,
        RawTag::GreaterEqual => TokenKind::GtEq,
        RawTag::Shr => TokenKind::Shr,
        RawTag::ShrEqual => TokenKind::ShrEq,
        RawTag::Question => TokenKind::Question,
        RawTag::Dot => TokenKind::Dot,
        RawTag::DotStar => TokenKind::DotStar,
        RawTag::DotDotDot => TokenKind::Ellipsis,

        // === Delimiters ===
        RawTag::LeftParen => TokenKind::LParen,
        RawTag::RightParen => TokenKind::RParen,
        RawTag::LeftBracket => TokenKind::LBracket,
        RawTag::RightBracket => TokenKind::RBracket,
        RawTag::LeftBrace => TokenKind::LBrace,
        RawTag::RightBrace => TokenKind::RBrace,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Colon => TokenKind::Colon,
        RawTag::ColonColon => TokenKind::ColonColon,
        RawTag::Hash => TokenKind::Hash,
        RawTag::HashHash => TokenKind::HashHash,
        RawTag::At => TokenKind::At,

        RawTag::Eof => TokenKind::Eof,

        RawTag::Whitespace
        | RawTag::Newline
        | RawTag::LineSplice
        | RawTag::LineComment
        | RawTag::BlockComment
        | RawTag::InvalidByte
        | RawTag::UnterminatedString
        | RawTag::UnterminatedChar
        | RawTag::UnterminatedRawString
        | RawTag::UnterminatedBlockComment
        | RawTag::StrayBackslash
        | RawTag::InteriorNull => TokenKind::Error,
    }
}

fn cook_ident(text: &str) -> TokenKind {
    // The scanner keeps line splices inside an identifier's spelling.
    if text.contains('\\') {
        return resolve_ident(&text.replace("\\\r\n", "").replace("\\\n", ""));
    }
    resolve_ident(text)
}

#[inline]
fn resolve_ident(text: &str) -> TokenKind {
    if let Some(op) = keywords::alternative_operator(text) {
        return op;
    }
    match keywords::lookup(text) {
        Some(kw) => TokenKind::Keyword(kw),
        None => TokenKind::Ident,
    }
}
