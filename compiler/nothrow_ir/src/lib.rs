//! nothrow IR - shared vocabulary types
//!
//! This crate holds the small set of types every other `nothrow` crate
//! speaks in:
//! - [`Span`] for byte ranges into a source file
//! - [`Token`], [`TokenKind`], [`Keyword`] for cooked lexer output
//! - [`Signature`] and [`ExceptionSpecKind`] for the type-level view of one
//!   function declaration, as handed over by an external front end
//!
//! Nothing here performs analysis. The types are plain `Copy` data so they
//! can be passed between threads without synchronization.

/// Compile-time assertion that a type has a specific size.
///
/// Tokens and spans are created per byte of scanned input; keep them small.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod signature;
mod span;
mod token;

pub use signature::{ExceptionSpecKind, Signature};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
