//! Byte-dispatch scanner for C-family source.
//!
//! [`RawScanner::next_token`] matches on the byte under the cursor (all 256
//! values are covered) and hands off to one method per token family. Nothing
//! is allocated. Keywords are not resolved and escapes are not decoded.
//! The sentinel byte dispatches to `eof`, which also catches interior NULs.
//!
//! Line splices (`\` + newline) are joined inside identifiers, so
//! `con\<newline>st` is one `Ident` whose spelling still holds the splice.
//! Anywhere else a splice is its own trivia token: `&\<newline>&` scans as
//! two `&`, not `&&`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Longest raw-string delimiter the grammar allows.
const MAX_RAW_DELIMITER: usize = 16;

/// Turns source bytes into `(tag, length)` pairs, one per call.
///
/// Malformed input becomes error tags, never `Err`. A clone is a snapshot:
/// it replays the same tokens from the same position.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset where the next token will start.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text between two offsets already passed by this scanner.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' | 0x80..=0xFF => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString),
            b'\'' => self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar),
            b'/' => self.slash(start),
            b'\\' => self.backslash(start),
            b'+' => self.operator(
                start,
                RawTag::Plus,
                &[(b'+', RawTag::PlusPlus), (b'=', RawTag::PlusEqual)],
            ),
            b'-' => self.minus(start),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_equal(start, RawTag::Caret, RawTag::CaretEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'&' => self.operator(
                start,
                RawTag::Ampersand,
                &[(b'&', RawTag::AmpersandAmpersand), (b'=', RawTag::AmpersandEqual)],
            ),
            b'|' => self.operator(
                start,
                RawTag::Pipe,
                &[(b'|', RawTag::PipePipe), (b'=', RawTag::PipeEqual)],
            ),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'.' => self.dot(start),
            b':' => self.operator(start, RawTag::Colon, &[(b':', RawTag::ColonColon)]),
            b'#' => self.operator(start, RawTag::Hash, &[(b'#', RawTag::HashHash)]),
            b'~' => self.single(start, RawTag::Tilde),
            b'?' => self.single(start, RawTag::Question),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'@' => self.single(start, RawTag::At),
            // Control characters (excluding whitespace), backtick, DEL
            1..=8 | 14..=31 | b'`' | 127 => self.single(start, RawTag::InvalidByte),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: advance past it. SourceBuffer already
            // recorded it as an encoding issue.
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(RawTag::InteriorNull, start)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.token(RawTag::Newline, start)
        } else {
            self.token(RawTag::Whitespace, start)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(RawTag::Newline, start)
    }

    fn backslash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'\n' => {
                self.cursor.advance();
                self.token(RawTag::LineSplice, start)
            }
            b'\r' if self.cursor.peek() == b'\n' => {
                self.cursor.advance_n(2);
                self.token(RawTag::LineSplice, start)
            }
            _ => self.token(RawTag::StrayBackslash, start),
        }
    }

    // ─── Comments ──────────────────────────────────────────────────────

    fn slash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'/' => self.line_comment(start),
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_past(b"*/") {
                    self.token(RawTag::BlockComment, start)
                } else {
                    self.token(RawTag::UnterminatedBlockComment, start)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.token(RawTag::SlashEqual, start)
            }
            _ => self.token(RawTag::Slash, start),
        }
    }

    /// `//` comment. A line splice at the end of the line continues it.
    ///
    /// The `\r` of a CRLF line ending stays inside the comment token.
    fn line_comment(&mut self, start: u32) -> RawToken {
        loop {
            self.cursor.eat_until_newline_or_eof();
            if self.cursor.is_eof() {
                break;
            }
            let text = self.cursor.slice_from(start);
            if text.ends_with('\\') || text.ends_with("\\\r") {
                self.cursor.advance();
                continue;
            }
            break;
        }
        self.token(RawTag::LineComment, start)
    }

    // ─── Identifiers ───────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        while self.join_splice() {
            self.cursor.eat_while(is_ident_continue);
        }

        // Encoding prefixes glue onto a following literal: u8"..", LR"(..)".
        match (self.cursor.current(), self.cursor.slice_from(start)) {
            (b'"', "R" | "u8R" | "uR" | "UR" | "LR") => self.raw_string(start),
            (b'"', "u8" | "u" | "U" | "L") => {
                self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString)
            }
            (b'\'', "u8" | "u" | "U" | "L") => {
                self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar)
            }
            _ => self.token(RawTag::Ident, start),
        }
    }

    /// Step over a `\`-newline (or `\`-CRLF) when an identifier byte follows it.
    fn join_splice(&mut self) -> bool {
        if self.cursor.current() != b'\\' {
            return false;
        }
        let mut ahead = self.cursor;
        ahead.advance();
        if ahead.current() == b'\r' {
            ahead.advance();
        }
        if ahead.current() != b'\n' {
            return false;
        }
        ahead.advance();
        if !is_ident_continue(ahead.current()) {
            return false;
        }
        self.cursor = ahead;
        true
    }

    // ─── Numeric Literals ──────────────────────────────────────────────

    /// Preprocessing number. Value and suffix validity are not checked.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                b'e' | b'E' | b'p' | b'P' if matches!(self.cursor.peek(), b'+' | b'-') => {
                    self.cursor.advance_n(2);
                }
                b'\'' if is_ident_continue(self.cursor.peek()) => self.cursor.advance_n(2),
                b'.' => self.cursor.advance(),
                b if is_ident_continue(b) => self.cursor.advance(),
                _ => break,
            }
        }
        self.token(RawTag::Number, start)
    }

    // ─── String & Char Literals ────────────────────────────────────────

    /// Quoted literal. The cursor sits on the opening quote; anything
    /// before it (an encoding prefix) is already part of the token.
    fn quoted(&mut self, start: u32, quote: u8, tag: RawTag, unterminated: RawTag) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b if b == quote => {
                    self.cursor.advance();
                    return self.token(tag, start);
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
                        self.cursor.advance_n(2);
                    } else if !self.cursor.is_eof() {
                        self.cursor.advance_char(); // escaped char
                    }
                }
                b'\n' | b'\r' => return self.token(unterminated, start),
                _ => {
                    if self.cursor.is_eof() {
                        return self.token(unterminated, start);
                    }
                    // Interior null
                    self.cursor.advance();
                }
            }
        }
    }

    /// Raw string `R"delim( ... )delim"`. The cursor sits on the `"`.
    fn raw_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let delim_start = self.cursor.pos();
        self.cursor.eat_while(|b| {
            !matches!(b, b'(' | b')' | b'\\' | b'"' | 0) && !b.is_ascii_whitespace()
        });
        let delimiter = self.cursor.slice_from(delim_start).as_bytes();
        if self.cursor.current() != b'(' || delimiter.len() > MAX_RAW_DELIMITER {
            return self.token(RawTag::UnterminatedRawString, start);
        }
        self.cursor.advance();

        // Closing sequence: ')' + delimiter + '"'
        let mut closing = [0u8; MAX_RAW_DELIMITER + 2];
        closing[0] = b')';
        closing[1..=delimiter.len()].copy_from_slice(delimiter);
        closing[delimiter.len() + 1] = b'"';
        if self.cursor.eat_past(&closing[..delimiter.len() + 2]) {
            self.token(RawTag::RawString, start)
        } else {
            self.token(RawTag::UnterminatedRawString, start)
        }
    }

    // ─── Operators ─────────────────────────────────────────────────────

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// One-byte operator, or a two-byte one if the next byte appears in
    /// `longer`.
    fn operator(&mut self, start: u32, bare: RawTag, longer: &[(u8, RawTag)]) -> RawToken {
        self.cursor.advance();
        let next = self.cursor.current();
        match longer.iter().find(|&&(byte, _)| byte == next) {
            Some(&(_, tag)) => self.single(start, tag),
            None => self.token(bare, start),
        }
    }

    /// Grow `token` by one byte into `tag` if the next byte is `byte`.
    fn extend(&mut self, start: u32, token: RawToken, byte: u8, tag: RawTag) -> RawToken {
        if self.cursor.current() == byte {
            self.single(start, tag)
        } else {
            token
        }
    }

    /// `x` or `x=`.
    fn with_equal(&mut self, start: u32, bare: RawTag, assign: RawTag) -> RawToken {
        self.operator(start, bare, &[(b'=', assign)])
    }

    /// `-`, `--`, `-=`, `->`, `->*`.
    fn minus(&mut self, start: u32) -> RawToken {
        let token = self.operator(
            start,
            RawTag::Minus,
            &[
                (b'-', RawTag::MinusMinus),
                (b'=', RawTag::MinusEqual),
                (b'>', RawTag::Arrow),
            ],
        );
        match token.tag {
            RawTag::Arrow => self.extend(start, token, b'*', RawTag::ArrowStar),
            _ => token,
        }
    }

    /// `<`, `<=`, `<=>`, `<<`, `<<=`.
    fn less(&mut self, start: u32) -> RawToken {
        let token = self.operator(
            start,
            RawTag::Less,
            &[(b'=', RawTag::LessEqual), (b'<', RawTag::Shl)],
        );
        match token.tag {
            RawTag::LessEqual => self.extend(start, token, b'>', RawTag::Spaceship),
            RawTag::Shl => self.extend(start, token, b'=', RawTag::ShlEqual),
            _ => token,
        }
    }

    /// `>`, `>=`, `>>`, `>>=`.
    fn greater(&mut self, start: u32) -> RawToken {
        let token = self.operator(
            start,
            RawTag::Greater,
            &[(b'=', RawTag::GreaterEqual), (b'>', RawTag::Shr)],
        );
        match token.tag {
            RawTag::Shr => self.extend(start, token, b'=', RawTag::ShrEqual),
            _ => token,
        }
    }

    /// `.`, `...`, `.*`, or a number like `.5`.
    fn dot(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'0'..=b'9', _) => self.number(start),
            (b'.', b'.') => {
                self.cursor.advance_n(3);
                self.token(RawTag::DotDotDot, start)
            }
            (b'*', _) => {
                self.cursor.advance_n(2);
                self.token(RawTag::DotStar, start)
            }
            _ => self.single(start, RawTag::Dot),
        }
    }
}

/// Identifier continuation: ASCII alphanumerics, `_`, `$`, and any byte of
/// a multi-byte UTF-8 sequence.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}
