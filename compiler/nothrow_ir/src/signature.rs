//! Type-level view of one function declaration.
//!
//! A [`Signature`] is produced by whatever front end parsed the source. The
//! analysis only reads it: the parameter-list end tells it where to start
//! scanning, and the resolved [`ExceptionSpecKind`] tells it whether to
//! scan at all.

use std::fmt;

use crate::Span;

/// Resolved exception-specification state of a function type.
///
/// This is the front end's classification, not source text. A closed set so
/// that every consumer is an exhaustive match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExceptionSpecKind {
    /// No exception specification written.
    #[default]
    None,
    /// A specification exists but has not been evaluated yet
    /// (e.g. implicitly declared special members, dependent expressions).
    Unevaluated,
    /// A `throw(...)` list.
    DynamicList,
    /// Any specification that guarantees no exception escapes:
    /// `noexcept`, `noexcept(true)`, `throw()`.
    NoThrowEquivalent,
    /// Anything the front end could not map onto the kinds above.
    Other,
}

impl ExceptionSpecKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExceptionSpecKind::None => "none",
            ExceptionSpecKind::Unevaluated => "unevaluated",
            ExceptionSpecKind::DynamicList => "dynamic_list",
            ExceptionSpecKind::NoThrowEquivalent => "no_throw_equivalent",
            ExceptionSpecKind::Other => "other",
        }
    }
}

impl fmt::Display for ExceptionSpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One function declaration, as seen by the type system.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    /// Full textual extent of the declaration.
    pub span: Span,
    /// Byte offset just past the `)` closing the parameter list.
    pub params_end: u32,
    pub exception_spec: ExceptionSpecKind,
}

impl Signature {
    #[inline]
    pub const fn new(span: Span, params_end: u32, exception_spec: ExceptionSpecKind) -> Self {
        Signature {
            span,
            params_end,
            exception_spec,
        }
    }
}
