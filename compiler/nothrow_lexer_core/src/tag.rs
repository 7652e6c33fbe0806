//! Raw token tags produced by the scanner.

/// Raw token tag with semantic range layout.
///
/// | Range   | Category             |
/// |---------|----------------------|
/// | 0-15    | Identifiers & literals |
/// | 32-79   | Operators            |
/// | 80-99   | Delimiters           |
/// | 112-119 | Trivia               |
/// | 240-249 | Errors               |
/// | 255     | EOF                  |
///
/// Errors are tags, not `Result::Err`: the scanner never fails, it only
/// labels what it saw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & literals (0-15) ===
    /// Any identifier-like spelling, keywords included.
    Ident = 0,
    /// Preprocessing number (`42`, `0x1p-3`, `1'000`, `2.5e+10f`).
    Number = 1,
    /// String literal, with optional encoding prefix.
    String = 2,
    /// Character literal, with optional encoding prefix.
    Char = 3,
    /// Raw string literal `R"delim(...)delim"`, with optional encoding prefix.
    RawString = 4,

    // === Operators (32-79) ===
    Plus = 32,
    PlusPlus = 33,
    PlusEqual = 34,
    Minus = 35,
    MinusMinus = 36,
    MinusEqual = 37,
    Arrow = 38,
    ArrowStar = 39,
    Star = 40,
    StarEqual = 41,
    Slash = 42,
    SlashEqual = 43,
    Percent = 44,
    PercentEqual = 45,
    Caret = 46,
    CaretEqual = 47,
    Ampersand = 48,
    AmpersandAmpersand = 49,
    AmpersandEqual = 50,
    Pipe = 51,
    PipePipe = 52,
    PipeEqual = 53,
    Tilde = 54,
    Bang = 55,
    BangEqual = 56,
    Equal = 57,
    EqualEqual = 58,
    Less = 59,
    LessEqual = 60,
    Shl = 61,
    ShlEqual = 62,
    Spaceship = 63,
    Greater = 64,
    GreaterEqual = 65,
    Shr = 66,
    ShrEqual = 67,
    Question = 68,
    Dot = 69,
    DotStar = 70,
    DotDotDot = 71,

    // === Delimiters (80-99) ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,
    Colon = 88,
    ColonColon = 89,
    Hash = 90,
    HashHash = 91,
    At = 92,

    // === Trivia (112-119) ===
    /// Spaces, tabs, vertical tabs, form feeds, lone `\r`.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `\` followed by a newline.
    LineSplice = 114,
    /// `// ...` up to (not including) the newline; continues over line splices.
    LineComment = 115,
    /// `/* ... */`.
    BlockComment = 116,

    // === Errors (240-249) ===
    /// Control character or other byte with no lexical meaning.
    InvalidByte = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedRawString = 243,
    UnterminatedBlockComment = 244,
    /// `\` not followed by a newline.
    StrayBackslash = 245,
    /// A `0x00` byte inside the source content.
    InteriorNull = 246,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for whitespace, newlines, line splices, and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (self as u8) >= 112 && (self as u8) < 120
    }

    /// Returns `true` for tags describing malformed input.
    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && (self as u8) < 250
    }

    /// Fixed source text of this tag, if it always has the same spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            RawTag::Plus => "+",
            RawTag::PlusPlus => "++",
            RawTag::PlusEqual => "+=",
            RawTag::Minus => "-",
            RawTag::MinusMinus => "--",
            RawTag::MinusEqual => "-=",
            RawTag::Arrow => "->",
            RawTag::ArrowStar => "->*",
            RawTag::Star => "*",
            RawTag::StarEqual => "*=",
            RawTag::Slash => "/",
            RawTag::SlashEqual => "/=",
            RawTag::Percent => "%",
            RawTag::PercentEqual => "%=",
            RawTag::Caret => "^",
            RawTag::CaretEqual => "^=",
            RawTag::Ampersand => "&",
            RawTag::AmpersandAmpersand => "&&",
            RawTag::AmpersandEqual => "&=",
            RawTag::Pipe => "|",
            RawTag::PipePipe => "||",
            RawTag::PipeEqual => "|=",
            RawTag::Tilde => "~",
            RawTag::Bang => "!",
            RawTag::BangEqual => "!=",
            RawTag::Equal => "=",
            RawTag::EqualEqual => "==",
            RawTag::Less => "<",
            RawTag::LessEqual => "<=",
            RawTag::Shl => "<<",
            RawTag::ShlEqual => "<<=",
            RawTag::Spaceship => "<=>",
            RawTag::Greater => ">",
            RawTag::GreaterEqual => ">=",
            RawTag::Shr => ">>",
            RawTag::ShrEqual => ">>=",
            RawTag::Question => "?",
            RawTag::Dot => ".",
            RawTag::DotStar => ".*",
            RawTag::DotDotDot => "...",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            RawTag::Colon => ":",
            RawTag::ColonColon => "::",
            RawTag::Hash => "#",
            RawTag::HashHash => "##",
            RawTag::At => "@",
            _ => return None,
        };
        Some(text)
    }
}

/// One raw token: a tag and its byte length.
///
/// The start offset is not stored; callers track it as the running sum of
/// lengths from wherever the scan began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);
