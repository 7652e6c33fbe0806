//! The [`Diagnostic`] type and its parts.

use std::fmt;

use nothrow_ir::Span;

use crate::fixes::TextEdit;
use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// The input could not be processed as given.
    Error,
    /// The input is valid but could be improved.
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span in the source with a short message shown next to it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A fix: a description plus the edits that carry it out.
///
/// Every suggestion nothrow produces is safe to apply without review; the
/// edits go straight into a [`ChangeTracker`](crate::fixes::ChangeTracker).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    pub message: String,
    pub edits: Vec<TextEdit>,
}

impl Suggestion {
    pub fn new(message: impl Into<String>, edit: TextEdit) -> Self {
        Suggestion {
            message: message.into(),
            edits: vec![edit],
        }
    }
}

/// One finding, ready for an emitter.
///
/// Built with chained `with_*` calls:
///
/// ```
/// use nothrow_diagnostic::fixes::TextEdit;
/// use nothrow_diagnostic::{Diagnostic, ErrorCode};
/// use nothrow_ir::Span;
///
/// let diag = Diagnostic::warning(ErrorCode::N0001)
///     .with_message("'noexcept' missing")
///     .with_label(Span::point(8), "'noexcept' missing")
///     .with_fix("add `noexcept`", TextEdit::insert(8, " noexcept"));
/// assert_eq!(diag.span(), Some(Span::point(8)));
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Highlighted spans. Empty when the finding has no usable location.
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Shorthand for a one-edit [`Suggestion`].
    pub fn with_fix(self, message: impl Into<String>, edit: TextEdit) -> Self {
        self.with_suggestion(Suggestion::new(message, edit))
    }

    /// Span of the first label, if any.
    pub fn span(&self) -> Option<Span> {
        self.labels.first().map(|l| l.span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Every edit of every suggestion, in order.
    pub fn edits(&self) -> impl Iterator<Item = &TextEdit> {
        self.suggestions.iter().flat_map(|s| s.edits.iter())
    }
}

/// Compact one-diagnostic rendering without source text, e.g. for logs.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            write!(f, "\n  --> {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {}", suggestion.message)?;
        }
        Ok(())
    }
}
