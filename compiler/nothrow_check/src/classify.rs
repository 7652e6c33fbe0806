//! Exception-specification classification.

use nothrow_ir::ExceptionSpecKind;

/// What to do about one signature's exception specification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SpecDecision {
    /// No usable specification: plan an insertion.
    Insert,
    /// Leave the declaration alone.
    Skip,
}

impl SpecDecision {
    #[inline]
    pub fn is_insert(self) -> bool {
        matches!(self, SpecDecision::Insert)
    }
}

/// Decide from the resolved kind alone. `Unevaluated` inserts too.
#[inline]
pub fn classify(kind: ExceptionSpecKind) -> SpecDecision {
    match kind {
        ExceptionSpecKind::None | ExceptionSpecKind::Unevaluated => SpecDecision::Insert,
        ExceptionSpecKind::DynamicList
        | ExceptionSpecKind::NoThrowEquivalent
        | ExceptionSpecKind::Other => SpecDecision::Skip,
    }
}
