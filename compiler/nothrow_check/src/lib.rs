//! Missing exception-specification detection and fix planning.
//!
//! Given one function [`Signature`](nothrow_ir::Signature) and the source
//! text behind it, [`compute_insertion_plan`] decides whether a `noexcept`
//! belongs on the declaration and, if so, exactly where:
//!
//! 1. [`classify`] the resolved exception-specification kind
//! 2. re-lex the source from the end of the parameter list
//! 3. [`skip_qualifiers`] past `&`, `&&`, `const`, `volatile`, `restrict`
//! 4. build an [`InsertionPlan`]
//!
//! Each call is independent and holds no state, so callers may plan many
//! signatures in parallel over one shared, immutable [`SourceBuffer`].
//! Choosing which declarations to visit and applying or displaying the result
//! are the caller's business.

mod classify;
mod plan;
mod qualifiers;

pub use classify::{classify, SpecDecision};
pub use nothrow_lexer_core::SourceBuffer;
pub use plan::{
    compute_insertion_plan, InsertionPlan, InsertionPlanner, PlanOptions, ReportRange,
    INSERTED_TEXT, MISSING_SPEC_MESSAGE, SPEC_KEYWORD,
};
pub use qualifiers::{is_trailing_qualifier, skip_qualifiers};
