use super::*;
use nothrow_diagnostic::fixes::ChangeTracker;
use nothrow_diagnostic::Severity;
use pretty_assertions::assert_eq;

fn signature(source: &str, kind: ExceptionSpecKind) -> Signature {
    let params_end = source.find(')').map_or(0, |i| i + 1) as u32;
    Signature::new(Span::new(0, source.len() as u32), params_end, kind)
}

fn apply(plan: &InsertionPlan, source: &str) -> String {
    let mut tracker = ChangeTracker::new();
    tracker.push(plan.to_edit());
    tracker.apply(source).unwrap_or_default()
}

#[test]
fn plan_for_plain_signature() {
    let source = "int f(int x)";
    let buf = SourceBuffer::new(source);
    let plan = compute_insertion_plan(&signature(source, ExceptionSpecKind::None), &buf);
    let Some(plan) = plan else {
        panic!("expected a plan");
    };
    assert_eq!(plan.insert_offset(), 12);
    assert_eq!(plan.inserted_text(), " noexcept");
    assert_eq!(plan.message(), "'noexcept' missing");
    assert_eq!(plan.diagnostic_range(), Span::point(12));
    assert_eq!(plan.spec_kind(), ExceptionSpecKind::None);
}

#[test]
fn skipped_kinds_produce_no_plan() {
    let source = "int g(int x) const noexcept";
    let buf = SourceBuffer::new(source);
    for kind in [
        ExceptionSpecKind::DynamicList,
        ExceptionSpecKind::NoThrowEquivalent,
        ExceptionSpecKind::Other,
    ] {
        assert_eq!(compute_insertion_plan(&signature(source, kind), &buf), None, "{kind}");
    }
}

#[test]
fn unevaluated_is_planned_with_note() {
    let source = "S(S&&)";
    let buf = SourceBuffer::new(source);
    let sig = Signature::new(Span::new(0, 6), 6, ExceptionSpecKind::Unevaluated);
    let Some(plan) = compute_insertion_plan(&sig, &buf) else {
        panic!("expected a plan");
    };
    assert_eq!(plan.insert_offset(), 6);
    let diag = plan.to_diagnostic();
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn offset_lands_after_qualifiers() {
    let source = "int h(int x) const & { return x; }";
    let buf = SourceBuffer::new(source);
    let plan = compute_insertion_plan(&signature(source, ExceptionSpecKind::None), &buf);
    assert_eq!(plan.map(|p| p.insert_offset()), Some(20));
}

#[test]
fn offset_never_precedes_params_end() {
    let source = "void f() {";
    let buf = SourceBuffer::new(source);
    let sig = signature(source, ExceptionSpecKind::None);
    let plan = compute_insertion_plan(&sig, &buf);
    assert_eq!(plan.map(|p| p.insert_offset()), Some(sig.params_end));
}

#[test]
fn signature_report_range() {
    let source = "int h(int x) const;";
    let buf = SourceBuffer::new(source);
    let sig = Signature::new(Span::new(0, 18), 12, ExceptionSpecKind::None);
    let planner = InsertionPlanner::new(PlanOptions {
        report_range: ReportRange::Signature,
    });
    let Some(plan) = planner.plan(&sig, &buf) else {
        panic!("expected a plan");
    };
    assert_eq!(plan.diagnostic_range(), Span::new(0, 18));
    assert_eq!(plan.insert_offset(), 18);
}

#[test]
fn plan_applies_as_edit() {
    let source = "int h(int x) const;";
    let buf = SourceBuffer::new(source);
    let sig = Signature::new(Span::new(0, 18), 12, ExceptionSpecKind::None);
    let Some(plan) = compute_insertion_plan(&sig, &buf) else {
        panic!("expected a plan");
    };
    assert_eq!(plan.to_edit(), TextEdit::insert(18, " noexcept"));
    assert_eq!(apply(&plan, source), "int h(int x) const noexcept;");
}

#[test]
fn plan_as_diagnostic() {
    let source = "void f()";
    let buf = SourceBuffer::new(source);
    let Some(plan) = compute_insertion_plan(&signature(source, ExceptionSpecKind::None), &buf)
    else {
        panic!("expected a plan");
    };
    let diag = plan.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::N0001);
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.message, "'noexcept' missing");
    assert_eq!(diag.span(), Some(Span::point(8)));
    assert!(diag.notes.is_empty());

    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.suggestions[0].message, "add `noexcept`");
    let edits: Vec<&TextEdit> = diag.edits().collect();
    assert_eq!(edits, vec![&plan.to_edit()]);
}

#[test]
fn params_end_at_source_end() {
    let source = "void f()";
    let buf = SourceBuffer::new(source);
    let sig = Signature::new(Span::new(0, 8), 8, ExceptionSpecKind::None);
    assert_eq!(compute_insertion_plan(&sig, &buf).map(|p| p.insert_offset()), Some(8));
}

#[test]
#[should_panic(expected = "parameter list end 40 is past the end of the source (8 bytes)")]
fn params_end_past_source_panics() {
    let buf = SourceBuffer::new("void f()");
    let sig = Signature::new(Span::new(0, 8), 40, ExceptionSpecKind::None);
    let _ = compute_insertion_plan(&sig, &buf);
}

#[test]
#[should_panic(expected = "past the end of the source")]
fn precondition_checked_even_when_skipping() {
    let buf = SourceBuffer::new("");
    let sig = Signature::new(Span::new(0, 0), 1, ExceptionSpecKind::NoThrowEquivalent);
    let _ = compute_insertion_plan(&sig, &buf);
}
