use super::*;
use nothrow_ir::{Keyword, Span, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn lex_whole_signature() {
    let source = "int Widget::size() const & noexcept;";
    let buf = SourceBuffer::new(source);
    let kinds: Vec<TokenKind> = lex(&buf).iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(Keyword::Int),
            TokenKind::Ident,
            TokenKind::ColonColon,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Keyword(Keyword::Const),
            TokenKind::Amp,
            TokenKind::Keyword(Keyword::Noexcept),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_ends_with_eof_at_source_len() {
    let buf = SourceBuffer::new("a b  ");
    let tokens = lex(&buf);
    assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(5)));
}

#[test]
fn lex_alternative_qualifier_spellings() {
    let buf = SourceBuffer::new("f() bitand and");
    let kinds: Vec<TokenKind> = lex(&buf).iter().skip(3).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Amp, TokenKind::AmpAmp, TokenKind::Eof]
    );
}
