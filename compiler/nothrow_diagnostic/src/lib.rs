//! Diagnostic system for nothrow.
//!
//! Every finding is a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what is wrong
//! - a label saying where
//! - structured [`Suggestion`]s saying how to fix it
//!
//! A suggestion's [`fixes::TextEdit`]s are applied by a
//! [`fixes::ChangeTracker`]. Emitters render diagnostics for a
//! terminal or as JSON.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod fixes;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity, Suggestion};
pub use error_code::{ErrorCode, UnknownCode};
