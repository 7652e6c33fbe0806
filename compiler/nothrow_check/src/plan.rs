//! Insertion planning.
//!
//! [`InsertionPlanner::plan`] is the whole pipeline for one signature:
//! classify, re-lex from the parameter list end, skip qualifiers, and emit
//! an [`InsertionPlan`]. It keeps no state between calls.

use nothrow_diagnostic::fixes::TextEdit;
use nothrow_diagnostic::{Diagnostic, ErrorCode};
use nothrow_ir::{ExceptionSpecKind, Signature, Span};
use nothrow_lexer::TokenStream;
use nothrow_lexer_core::SourceBuffer;

use crate::{classify, skip_qualifiers};

/// The specification keyword the plan inserts.
pub const SPEC_KEYWORD: &str = "noexcept";

/// Text spliced in at the insertion offset.
pub const INSERTED_TEXT: &str = " noexcept";

/// Message attached to every plan.
pub const MISSING_SPEC_MESSAGE: &str = "'noexcept' missing";

/// Which range a plan's diagnostic points at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ReportRange {
    /// An empty range at the insertion offset.
    #[default]
    Point,
    /// The whole declaration.
    Signature,
}

/// Knobs for [`InsertionPlanner`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PlanOptions {
    pub report_range: ReportRange,
}

/// One planned edit: insert [`INSERTED_TEXT`] at `insert_offset`.
///
/// Plans are read-only once built.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InsertionPlan {
    insert_offset: u32,
    diagnostic_range: Span,
    spec_kind: ExceptionSpecKind,
}

impl InsertionPlan {
    /// Byte offset where [`INSERTED_TEXT`] goes.
    #[inline]
    pub fn insert_offset(&self) -> u32 {
        self.insert_offset
    }

    #[inline]
    pub fn inserted_text(&self) -> &'static str {
        INSERTED_TEXT
    }

    #[inline]
    pub fn diagnostic_range(&self) -> Span {
        self.diagnostic_range
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        MISSING_SPEC_MESSAGE
    }

    /// The classification that led to this plan.
    #[inline]
    pub fn spec_kind(&self) -> ExceptionSpecKind {
        self.spec_kind
    }

    /// The plan as a text edit.
    pub fn to_edit(&self) -> TextEdit {
        TextEdit::insert(self.insert_offset, INSERTED_TEXT)
    }

    /// The plan as an `N0001` warning whose fix is [`to_edit`](Self::to_edit).
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::warning(ErrorCode::N0001)
            .with_message(MISSING_SPEC_MESSAGE)
            .with_label(self.diagnostic_range, MISSING_SPEC_MESSAGE)
            .with_fix(format!("add `{SPEC_KEYWORD}`"), self.to_edit());
        if self.spec_kind == ExceptionSpecKind::Unevaluated {
            diagnostic.with_note("the exception specification is not evaluated yet")
        } else {
            diagnostic
        }
    }
}

/// Plans `noexcept` insertions, one signature at a time.
#[derive(Copy, Clone, Debug, Default)]
pub struct InsertionPlanner {
    options: PlanOptions,
}

impl InsertionPlanner {
    pub fn new(options: PlanOptions) -> Self {
        InsertionPlanner { options }
    }

    /// Plan the insertion for `signature`, or `None` if it needs none.
    ///
    /// # Panics
    ///
    /// Panics if `signature.params_end` lies past the end of `source`. The
    /// caller guarantees signatures belong to the text they are paired with.
    #[tracing::instrument(level = "trace", skip_all, fields(
        params_end = signature.params_end,
        kind = %signature.exception_spec,
    ))]
    pub fn plan(&self, signature: &Signature, source: &SourceBuffer) -> Option<InsertionPlan> {
        assert!(
            signature.params_end <= source.len(),
            "parameter list end {} is past the end of the source ({} bytes)",
            signature.params_end,
            source.len(),
        );

        if !classify(signature.exception_spec).is_insert() {
            tracing::trace!("exception specification present, skipping");
            return None;
        }

        let start = signature.params_end;
        let insert_offset = skip_qualifiers(TokenStream::new(source, start), start);
        tracing::debug!(insert_offset, "planned insertion");

        let diagnostic_range = match self.options.report_range {
            ReportRange::Point => Span::point(insert_offset),
            ReportRange::Signature => signature.span,
        };
        Some(InsertionPlan {
            insert_offset,
            diagnostic_range,
            spec_kind: signature.exception_spec,
        })
    }
}

/// Plan with default options (point diagnostic range).
pub fn compute_insertion_plan(signature: &Signature, source: &SourceBuffer) -> Option<InsertionPlan> {
    InsertionPlanner::default().plan(signature, source)
}

#[cfg(test)]
mod tests;
