//! Rendering diagnostics.
//!
//! [`TerminalEmitter`] writes snippets with carets for people and
//! [`JsonEmitter`] writes one JSON array for tools. Diagnostics only carry
//! byte spans; [`DiagnosticEmitter::set_source`] names the file and text they
//! point into.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::{self, Write as _};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// A file's path and text, with its line table built once.
#[derive(Clone, Debug)]
pub struct SourceContext {
    pub path: String,
    pub text: String,
    lines: LineOffsetTable,
}

impl SourceContext {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        SourceContext {
            lines: LineOffsetTable::new(&text),
            path: path.into(),
            text,
        }
    }

    /// 1-based `(line, column)`.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.line_col(&self.text, offset)
    }

    /// Text of a 1-based line; empty when there is no such line.
    pub fn line_text(&self, line: u32) -> &str {
        self.lines.line_text(&self.text, line).unwrap_or_default()
    }
}

pub trait DiagnosticEmitter {
    /// File the following diagnostics refer to; `None` when there is none.
    fn set_source(&mut self, source: Option<SourceContext>);

    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|d| self.emit(d));
    }

    fn flush(&mut self);

    /// Closing line with error and warning totals. Formats without one ignore it.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Displays as a quoted JSON string literal.
pub(crate) struct JsonStr<'a>(pub &'a str);

impl fmt::Display for JsonStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' | '\\' => {
                    f.write_char('\\')?;
                    f.write_char(c)?;
                }
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}
