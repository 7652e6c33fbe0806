//! Cooked tokens.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] it was scanned from.
//! Kinds are resolved from the raw spelling by the lexer: an identifier-like
//! spelling becomes [`TokenKind::Keyword`] only when it is spelled as one,
//! regardless of what any earlier phase thought it was.

use std::fmt;

use crate::Span;

/// A cooked lexical token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Byte offset one past the last byte of this token.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.span.end
    }
}

/// Token kinds for the C-family lexical grammar.
///
/// Trivia (whitespace, newlines, comments, line splices) never appears here;
/// the lexer drops it before cooking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Identifiers & keywords ===
    Ident,
    Keyword(Keyword),

    // === Literals ===
    Number,
    String,
    Char,

    // === Delimiters ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Colon,
    ColonColon,
    Dot,
    DotStar,
    Ellipsis,
    Question,
    Hash,
    HashHash,
    At,

    // === Operators ===
    Arrow,
    ArrowStar,
    Tilde,
    Bang,
    BangEq,
    Eq,
    EqEq,
    Plus,
    PlusPlus,
    PlusEq,
    Minus,
    MinusMinus,
    MinusEq,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Caret,
    CaretEq,
    Amp,
    AmpAmp,
    AmpEq,
    Pipe,
    PipePipe,
    PipeEq,
    Lt,
    LtEq,
    Shl,
    ShlEq,
    Spaceship,
    Gt,
    GtEq,
    Shr,
    ShrEq,

    // === Special ===
    /// Malformed input (invalid byte, unterminated literal or comment).
    Error,
    Eof,
}

impl TokenKind {
    /// Fixed spelling of this kind, if it has one.
    ///
    /// Identifiers, literals, and errors have no fixed spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Keyword(kw) => return Some(kw.as_str()),
            TokenKind::Ident
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::Error
            | TokenKind::Eof => return None,
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::Dot => ".",
            TokenKind::DotStar => ".*",
            TokenKind::Ellipsis => "...",
            TokenKind::Question => "?",
            TokenKind::Hash => "#",
            TokenKind::HashHash => "##",
            TokenKind::At => "@",
            TokenKind::Arrow => "->",
            TokenKind::ArrowStar => "->*",
            TokenKind::Tilde => "~",
            TokenKind::Bang => "!",
            TokenKind::BangEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEq => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEq => "-=",
            TokenKind::Star => "*",
            TokenKind::StarEq => "*=",
            TokenKind::Slash => "/",
            TokenKind::SlashEq => "/=",
            TokenKind::Percent => "%",
            TokenKind::PercentEq => "%=",
            TokenKind::Caret => "^",
            TokenKind::CaretEq => "^=",
            TokenKind::Amp => "&",
            TokenKind::AmpAmp => "&&",
            TokenKind::AmpEq => "&=",
            TokenKind::Pipe => "|",
            TokenKind::PipePipe => "||",
            TokenKind::PipeEq => "|=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Shl => "<<",
            TokenKind::ShlEq => "<<=",
            TokenKind::Spaceship => "<=>",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Shr => ">>",
            TokenKind::ShrEq => ">>=",
        };
        Some(text)
    }

    /// Short human-readable name, used by token dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
            _ => "punctuator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.display_name()),
        }
    }
}

/// C++ reserved words.
///
/// Alternative operator spellings (`and`, `bitand`, ...) are not listed here:
/// the lexer cooks them straight into their punctuator kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Alignas,
    Alignof,
    Asm,
    Auto,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    Char8T,
    Char16T,
    Char32T,
    Class,
    CoAwait,
    CoReturn,
    CoYield,
    Concept,
    Const,
    ConstCast,
    Consteval,
    Constexpr,
    Constinit,
    Continue,
    Decltype,
    Default,
    Delete,
    Do,
    Double,
    DynamicCast,
    Else,
    Enum,
    Explicit,
    Export,
    Extern,
    False,
    Float,
    For,
    Friend,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Mutable,
    Namespace,
    New,
    Noexcept,
    Nullptr,
    Operator,
    Private,
    Protected,
    Public,
    Register,
    ReinterpretCast,
    Requires,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    StaticAssert,
    StaticCast,
    Struct,
    Switch,
    Template,
    This,
    ThreadLocal,
    Throw,
    True,
    Try,
    Typedef,
    Typeid,
    Typename,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    WcharT,
    While,
}

impl Keyword {
    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Alignas => "alignas",
            Keyword::Alignof => "alignof",
            Keyword::Asm => "asm",
            Keyword::Auto => "auto",
            Keyword::Bool => "bool",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Char => "char",
            Keyword::Char8T => "char8_t",
            Keyword::Char16T => "char16_t",
            Keyword::Char32T => "char32_t",
            Keyword::Class => "class",
            Keyword::CoAwait => "co_await",
            Keyword::CoReturn => "co_return",
            Keyword::CoYield => "co_yield",
            Keyword::Concept => "concept",
            Keyword::Const => "const",
            Keyword::ConstCast => "const_cast",
            Keyword::Consteval => "consteval",
            Keyword::Constexpr => "constexpr",
            Keyword::Constinit => "constinit",
            Keyword::Continue => "continue",
            Keyword::Decltype => "decltype",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Double => "double",
            Keyword::DynamicCast => "dynamic_cast",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Explicit => "explicit",
            Keyword::Export => "export",
            Keyword::Extern => "extern",
            Keyword::False => "false",
            Keyword::Float => "float",
            Keyword::For => "for",
            Keyword::Friend => "friend",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Inline => "inline",
            Keyword::Int => "int",
            Keyword::Long => "long",
            Keyword::Mutable => "mutable",
            Keyword::Namespace => "namespace",
            Keyword::New => "new",
            Keyword::Noexcept => "noexcept",
            Keyword::Nullptr => "nullptr",
            Keyword::Operator => "operator",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Public => "public",
            Keyword::Register => "register",
            Keyword::ReinterpretCast => "reinterpret_cast",
            Keyword::Requires => "requires",
            Keyword::Restrict => "restrict",
            Keyword::Return => "return",
            Keyword::Short => "short",
            Keyword::Signed => "signed",
            Keyword::Sizeof => "sizeof",
            Keyword::Static => "static",
            Keyword::StaticAssert => "static_assert",
            Keyword::StaticCast => "static_cast",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::Template => "template",
            Keyword::This => "this",
            Keyword::ThreadLocal => "thread_local",
            Keyword::Throw => "throw",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Typedef => "typedef",
            Keyword::Typeid => "typeid",
            Keyword::Typename => "typename",
            Keyword::Union => "union",
            Keyword::Unsigned => "unsigned",
            Keyword::Using => "using",
            Keyword::Virtual => "virtual",
            Keyword::Void => "void",
            Keyword::Volatile => "volatile",
            Keyword::WcharT => "wchar_t",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 12);
}
