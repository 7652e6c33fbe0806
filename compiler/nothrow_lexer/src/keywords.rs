//! Keyword resolution from raw spelling.
//!
//! Two tables, both keyed on the identifier's exact text:
//! 1. **Reserved keywords**: length-bucketed lookup over the C++20 keyword
//!    set, plus `restrict` and the GNU double-underscore spellings of the
//!    qualifier keywords.
//! 2. **Alternative operator spellings**: `and`, `bitand`, `or`, ... are
//!    identifiers to the scanner but punctuators to the grammar, so they cook
//!    straight into the punctuator's [`TokenKind`].
//!
//! Identity always comes from the spelling. Nothing here consults a symbol
//! table, so a macro named `const` is still the keyword `const`.

use nothrow_ir::{Keyword, TokenKind};

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers and for alternative operator
/// spellings (see [`alternative_operator`]).
///
/// Keywords are 2-16 bytes long; anything outside that range, or not
/// starting with an ASCII letter or `_`, is rejected without comparing.
#[inline]
pub fn lookup(text: &str) -> Option<Keyword> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=16).contains(&len) {
        return None;
    }
    let first = bytes[0];
    if !first.is_ascii_lowercase() && first != b'_' {
        return None;
    }

    let keyword = match len {
        2 => match text {
            "do" => Keyword::Do,
            "if" => Keyword::If,
            _ => return None,
        },
        3 => match text {
            "asm" => Keyword::Asm,
            "for" => Keyword::For,
            "int" => Keyword::Int,
            "new" => Keyword::New,
            "try" => Keyword::Try,
            _ => return None,
        },
        4 => match text {
            "auto" => Keyword::Auto,
            "bool" => Keyword::Bool,
            "case" => Keyword::Case,
            "char" => Keyword::Char,
            "else" => Keyword::Else,
            "enum" => Keyword::Enum,
            "goto" => Keyword::Goto,
            "long" => Keyword::Long,
            "this" => Keyword::This,
            "true" => Keyword::True,
            "void" => Keyword::Void,
            _ => return None,
        },
        5 => match text {
            "break" => Keyword::Break,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "false" => Keyword::False,
            "float" => Keyword::Float,
            "short" => Keyword::Short,
            "throw" => Keyword::Throw,
            "union" => Keyword::Union,
            "using" => Keyword::Using,
            "while" => Keyword::While,
            _ => return None,
        },
        6 => match text {
            "delete" => Keyword::Delete,
            "double" => Keyword::Double,
            "export" => Keyword::Export,
            "extern" => Keyword::Extern,
            "friend" => Keyword::Friend,
            "inline" => Keyword::Inline,
            "public" => Keyword::Public,
            "return" => Keyword::Return,
            "signed" => Keyword::Signed,
            "sizeof" => Keyword::Sizeof,
            "static" => Keyword::Static,
            "struct" => Keyword::Struct,
            "switch" => Keyword::Switch,
            "typeid" => Keyword::Typeid,
            _ => return None,
        },
        7 => match text {
            "__const" => Keyword::Const,
            "alignas" => Keyword::Alignas,
            "alignof" => Keyword::Alignof,
            "char8_t" => Keyword::Char8T,
            "concept" => Keyword::Concept,
            "default" => Keyword::Default,
            "mutable" => Keyword::Mutable,
            "nullptr" => Keyword::Nullptr,
            "private" => Keyword::Private,
            "typedef" => Keyword::Typedef,
            "virtual" => Keyword::Virtual,
            "wchar_t" => Keyword::WcharT,
            _ => return None,
        },
        8 => match text {
            "char16_t" => Keyword::Char16T,
            "char32_t" => Keyword::Char32T,
            "co_await" => Keyword::CoAwait,
            "co_yield" => Keyword::CoYield,
            "continue" => Keyword::Continue,
            "decltype" => Keyword::Decltype,
            "explicit" => Keyword::Explicit,
            "noexcept" => Keyword::Noexcept,
            "operator" => Keyword::Operator,
            "register" => Keyword::Register,
            "requires" => Keyword::Requires,
            "restrict" => Keyword::Restrict,
            "template" => Keyword::Template,
            "typename" => Keyword::Typename,
            "unsigned" => Keyword::Unsigned,
            "volatile" => Keyword::Volatile,
            _ => return None,
        },
        9 => match text {
            "__const__" => Keyword::Const,
            "co_return" => Keyword::CoReturn,
            "consteval" => Keyword::Consteval,
            "constexpr" => Keyword::Constexpr,
            "constinit" => Keyword::Constinit,
            "namespace" => Keyword::Namespace,
            "protected" => Keyword::Protected,
            _ => return None,
        },
        10 => match text {
            "__restrict" => Keyword::Restrict,
            "__volatile" => Keyword::Volatile,
            "const_cast" => Keyword::ConstCast,
            _ => return None,
        },
        11 => match text {
            "static_cast" => Keyword::StaticCast,
            _ => return None,
        },
        12 => match text {
            "__restrict__" => Keyword::Restrict,
            "__volatile__" => Keyword::Volatile,
            "dynamic_cast" => Keyword::DynamicCast,
            "thread_local" => Keyword::ThreadLocal,
            _ => return None,
        },
        13 => match text {
            "static_assert" => Keyword::StaticAssert,
            _ => return None,
        },
        16 => match text {
            "reinterpret_cast" => Keyword::ReinterpretCast,
            _ => return None,
        },
        _ => return None,
    };
    Some(keyword)
}

/// Resolve an alternative operator spelling (`and`, `bitor`, `not_eq`, ...)
/// to the punctuator it stands for.
#[inline]
pub fn alternative_operator(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "and" => TokenKind::AmpAmp,
        "and_eq" => TokenKind::AmpEq,
        "bitand" => TokenKind::Amp,
        "bitor" => TokenKind::Pipe,
        "compl" => TokenKind::Tilde,
        "not" => TokenKind::Bang,
        "not_eq" => TokenKind::BangEq,
        "or" => TokenKind::PipePipe,
        "or_eq" => TokenKind::PipeEq,
        "xor" => TokenKind::Caret,
        "xor_eq" => TokenKind::CaretEq,
        _ => return None,
    };
    Some(kind)
}
