//! Text edits and their application.
//!
//! Edits are collected in a [`ChangeTracker`] and applied in one pass from the
//! end of the text backwards, so every edit's offsets still refer to the
//! original text when it is applied.
//!
//! ```
//! use nothrow_diagnostic::fixes::{ChangeTracker, TextEdit};
//!
//! let mut tracker = ChangeTracker::new();
//! tracker.push(TextEdit::insert(12, " noexcept"));
//! assert_eq!(tracker.apply("int f(int x);").ok(), Some("int f(int x) noexcept;".to_string()));
//! ```

use nothrow_ir::Span;

/// Replace `span` with `new_text`. An empty span is an insertion.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        Self::replace(Span::point(at), text)
    }

    pub fn is_insert(&self) -> bool {
        self.span.is_empty()
    }
}

/// Why a set of edits could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("edits overlap: {first} and {second}")]
    Overlap { first: Span, second: Span },
    #[error("edit at {span} is outside the {len}-byte source")]
    OutOfBounds { span: Span, len: usize },
    #[error("edit at {span} splits a UTF-8 character")]
    NotCharBoundary { span: Span },
}

/// Collects text edits for one file and applies them together.
#[derive(Clone, Debug, Default)]
pub struct ChangeTracker {
    edits: Vec<TextEdit>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        ChangeTracker::default()
    }

    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Apply every edit to `source`.
    ///
    /// Nothing is applied if any edit falls outside `source`, splits a
    /// character, or overlaps another. Edits that only touch do not overlap,
    /// and insertions at the same offset all apply in push order.
    pub fn apply(&self, source: &str) -> Result<String, EditError> {
        let order = self.order(source)?;
        let mut result = source.to_string();
        for &i in order.iter().rev() {
            let edit = &self.edits[i];
            result.replace_range(edit.span.to_range(), &edit.new_text);
        }
        Ok(result)
    }

    /// Validate against `source` and return edit indices sorted by position.
    fn order(&self, source: &str) -> Result<Vec<usize>, EditError> {
        for edit in &self.edits {
            let range = edit.span.to_range();
            if range.start > range.end || range.end > source.len() {
                return Err(EditError::OutOfBounds {
                    span: edit.span,
                    len: source.len(),
                });
            }
            if !source.is_char_boundary(range.start) || !source.is_char_boundary(range.end) {
                return Err(EditError::NotCharBoundary { span: edit.span });
            }
        }

        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| (self.edits[i].span.start, self.edits[i].span.end, i));

        for pair in order.windows(2) {
            let (a, b) = (&self.edits[pair[0]], &self.edits[pair[1]]);
            let both_inserts_here = a.is_insert() && b.is_insert() && a.span.start == b.span.start;
            if a.span.end > b.span.start || (a.span.start == b.span.start && !both_inserts_here) {
                return Err(EditError::Overlap {
                    first: a.span,
                    second: b.span,
                });
            }
        }
        Ok(order)
    }
}
