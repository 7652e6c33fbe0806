use super::*;
use nothrow_ir::Keyword;
use pretty_assertions::assert_eq;

fn kinds_from(source: &str, start: u32) -> Vec<TokenKind> {
    let buf = SourceBuffer::new(source);
    TokenStream::new(&buf, start).map(|t| t.kind).collect()
}

#[test]
fn skips_trivia() {
    assert_eq!(
        kinds_from(") /* c */ const \\\n & // tail\n{", 0),
        vec![
            TokenKind::RParen,
            TokenKind::Keyword(Keyword::Const),
            TokenKind::Amp,
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn yields_one_eof_then_none() {
    let buf = SourceBuffer::new("x");
    let mut stream = TokenStream::new(&buf, 0);
    assert_eq!(stream.next().map(|t| t.kind), Some(TokenKind::Ident));
    let eof = stream.next();
    assert_eq!(eof, Some(Token::new(TokenKind::Eof, Span::point(1))));
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}

#[test]
fn empty_tail_is_just_eof() {
    assert_eq!(kinds_from("int f(int x)", 12), vec![TokenKind::Eof]);
    assert_eq!(kinds_from("", 0), vec![TokenKind::Eof]);
}

#[test]
fn spans_point_into_source() {
    let source = "int h(int x) const &&";
    let buf = SourceBuffer::new(source);
    let tokens: Vec<Token> = TokenStream::new(&buf, 12).collect();
    assert_eq!(tokens[0].span, Span::new(13, 18));
    assert_eq!(&source[13..18], "const");
    assert_eq!(tokens[1].span, Span::new(19, 21));
    assert_eq!(tokens[1].kind, TokenKind::AmpAmp);
    assert_eq!(tokens[2].span, Span::point(21));
}

#[test]
fn starting_mid_file_reresolves_identity() {
    // Starting inside `noexcept` sees the tail as a plain identifier.
    assert_eq!(
        kinds_from("noexcept", 2),
        vec![TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn clone_replays_from_snapshot() {
    let buf = SourceBuffer::new(") volatile restrict ;");
    let mut stream = TokenStream::new(&buf, 1);
    let snapshot = stream.clone();
    let first: Vec<Token> = stream.by_ref().collect();
    let second: Vec<Token> = snapshot.collect();
    assert_eq!(first, second);
    assert_eq!(stream.next(), None);
}

#[test]
fn same_offset_same_tokens() {
    let buf = SourceBuffer::new("void f() const & noexcept;");
    let a: Vec<Token> = TokenStream::new(&buf, 8).collect();
    let b: Vec<Token> = TokenStream::new(&buf, 8).collect();
    assert_eq!(a, b);
}

#[test]
fn malformed_input_still_terminates() {
    assert_eq!(
        kinds_from(") \"unterminated", 0),
        vec![TokenKind::RParen, TokenKind::Error, TokenKind::Eof]
    );
    assert_eq!(
        kinds_from(") /* never closed", 0),
        vec![TokenKind::RParen, TokenKind::Error, TokenKind::Eof]
    );
}
