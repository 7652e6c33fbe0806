use std::path::{Path, PathBuf};

use nothrow_check::{compute_insertion_plan, PlanOptions, ReportRange};
use nothrow_diagnostic::emitter::ColorMode;
use nothrow_ir::{ExceptionSpecKind, Signature, Span};
use nothrow_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use super::*;
use crate::cli::OutputFormat;
use crate::config::{CheckConfig, ExplainConfig, FixConfig, LexConfig};
use crate::error::DriverError;

const WIDGET: &str = "\
struct Widget {
    int size() const;
    void swap(Widget& other) noexcept;
};
void reset();
";

/// Write `widget.cpp` and a manifest describing its three functions.
fn widget_project(dir: &Path) -> PathBuf {
    std::fs::write(dir.join("widget.cpp"), WIDGET).unwrap();
    let manifest = r#"{
        "files": [{
            "path": "widget.cpp",
            "signatures": [
                { "name": "Widget::size", "span": { "start": 20, "end": 36 }, "params_end": 30 },
                { "name": "Widget::swap", "span": { "start": 42, "end": 75 }, "params_end": 66,
                  "exception_spec": "no_throw_equivalent" },
                { "name": "reset", "span": { "start": 80, "end": 92 }, "params_end": 92 }
            ]
        }]
    }"#;
    let path = dir.join("signatures.json");
    std::fs::write(&path, manifest).unwrap();
    path
}

fn check_config(manifest: PathBuf, format: OutputFormat) -> CheckConfig {
    CheckConfig {
        manifest,
        format,
        color: ColorMode::Never,
        plan: PlanOptions::default(),
    }
}

#[test]
fn widget_offsets_match_the_manifest() {
    assert_eq!(&WIDGET[20..36], "int size() const");
    assert_eq!(&WIDGET[42..75], "void swap(Widget& other) noexcept");
    assert_eq!(&WIDGET[80..92], "void reset()");
    assert_eq!(&WIDGET[29..30], ")");
    assert_eq!(&WIDGET[65..66], ")");
}

#[test]
fn check_reports_in_terminal_format() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = widget_project(dir.path());
    let mut out: Vec<u8> = Vec::new();

    let summary = run_check(&check_config(manifest, OutputFormat::Terminal), &mut out, false).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(
        summary,
        Summary {
            errors: 0,
            warnings: 2,
            insertions: 0,
            files_changed: 0,
        }
    );
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(out.matches("warning[N0001]: 'noexcept' missing").count(), 2);
    assert!(out.contains(" --> widget.cpp:2:21"), "{out}");
    assert!(out.contains(" --> widget.cpp:5:13"), "{out}");
    assert!(out.contains("= note: in function `Widget::size`"), "{out}");
    assert!(out.contains("= help: add `noexcept`"), "{out}");
    assert!(!out.contains("Widget::swap"), "{out}");
    assert!(out.ends_with("warning: 2 warnings emitted\n"), "{out}");
}

#[test]
fn check_reports_in_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = widget_project(dir.path());
    let mut out: Vec<u8> = Vec::new();

    run_check(&check_config(manifest, OutputFormat::Json), &mut out, false).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let findings = json.as_array().unwrap();

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["code"], "N0001");
    assert_eq!(findings[0]["file"], "widget.cpp");
    assert_eq!(findings[0]["labels"][0]["start"], 36);
    assert_eq!(findings[0]["labels"][0]["line"], 2);
    let edit = &findings[1]["suggestions"][0]["edits"][0];
    assert_eq!(edit["start"], 92);
    assert_eq!(edit["text"], " noexcept");
}

#[test]
fn check_signature_range_covers_the_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = widget_project(dir.path());
    let mut config = check_config(manifest, OutputFormat::Json);
    config.plan = PlanOptions {
        report_range: ReportRange::Signature,
    };
    let mut out: Vec<u8> = Vec::new();

    run_check(&config, &mut out, false).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json[0]["labels"][0]["start"], 20);
    assert_eq!(json[0]["labels"][0]["end"], 36);
}

#[test]
fn clean_check_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.cpp"), "void f() noexcept;").unwrap();
    let manifest = dir.path().join("m.json");
    std::fs::write(
        &manifest,
        r#"{ "files": [{ "path": "a.cpp", "signatures": [
            { "span": { "start": 0, "end": 17 }, "params_end": 8,
              "exception_spec": "no_throw_equivalent" }
        ] }] }"#,
    )
    .unwrap();
    let mut out: Vec<u8> = Vec::new();

    let summary = run_check(&check_config(manifest, OutputFormat::Terminal), &mut out, false).unwrap();
    assert_eq!(summary.exit_code(), 0);
    assert!(out.is_empty());
}

#[test]
fn check_with_missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = check_config(dir.path().join("nope.json"), OutputFormat::Terminal);
    let result = run_check(&config, Vec::<u8>::new(), false);
    assert!(matches!(result, Err(DriverError::ReadManifest { .. })));
}

#[test]
fn check_with_malformed_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("m.json");
    std::fs::write(&manifest, "{ \"files\": 3 }").unwrap();
    let result = run_check(&check_config(manifest, OutputFormat::Terminal), Vec::<u8>::new(), false);
    assert!(matches!(result, Err(DriverError::ParseManifest { .. })));
}

#[test]
fn fix_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = widget_project(dir.path());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let config = FixConfig {
        manifest,
        dry_run: false,
    };
    let summary = run_fix(&config, &mut out, &mut err).unwrap();

    assert_eq!(summary.insertions, 2);
    assert_eq!(summary.files_changed, 1);
    assert_eq!(summary.exit_code(), 0);
    assert!(out.is_empty());
    assert!(err.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("widget.cpp")).unwrap(),
        "\
struct Widget {
    int size() const noexcept;
    void swap(Widget& other) noexcept;
};
void reset() noexcept;
"
    );
}

#[test]
fn fix_dry_run_leaves_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = widget_project(dir.path());
    let mut out: Vec<u8> = Vec::new();

    let config = FixConfig {
        manifest,
        dry_run: true,
    };
    let summary = run_fix(&config, &mut out, Vec::<u8>::new()).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(summary.insertions, 2);
    assert!(out.starts_with("==> widget.cpp <==\nstruct Widget {\n"), "{out}");
    assert!(out.contains("int size() const noexcept;"), "{out}");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("widget.cpp")).unwrap(),
        WIDGET
    );
}

#[test]
fn fix_reports_what_it_cannot_fix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.cpp"), "void f();").unwrap();
    let manifest = dir.path().join("m.json");
    std::fs::write(
        &manifest,
        r#"{ "files": [{ "path": "a.cpp", "signatures": [
            { "name": "f", "span": { "start": 0, "end": 8 }, "params_end": 8 },
            { "name": "ghost", "span": { "start": 0, "end": 80 }, "params_end": 80 }
        ] }] }"#,
    )
    .unwrap();
    let mut err: Vec<u8> = Vec::new();

    let config = FixConfig {
        manifest,
        dry_run: false,
    };
    let summary = run_fix(&config, &mut Vec::<u8>::new(), &mut err).unwrap();
    let err = String::from_utf8(err).unwrap();

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.insertions, 1);
    assert!(err.contains("error[N0002]: signature `ghost` does not fit this file"), "{err}");
    assert!(!err.contains("N0001"), "{err}");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("a.cpp")).unwrap(),
        "void f() noexcept;"
    );
}

#[test]
fn fix_merges_entries_for_the_same_file() {
    // A header seen by two translation units shows up once per unit.
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("w.h"), "void a();\nvoid b();\n").unwrap();
    let manifest = dir.path().join("m.json");
    std::fs::write(
        &manifest,
        r#"{ "files": [
            { "path": "w.h", "signatures": [
                { "name": "a", "span": { "start": 0, "end": 8 }, "params_end": 8 }
            ] },
            { "path": "./w.h", "signatures": [
                { "name": "a", "span": { "start": 0, "end": 8 }, "params_end": 8 },
                { "name": "b", "span": { "start": 10, "end": 18 }, "params_end": 18 }
            ] }
        ] }"#,
    )
    .unwrap();

    let config = FixConfig {
        manifest,
        dry_run: false,
    };
    let summary = run_fix(&config, &mut Vec::<u8>::new(), Vec::<u8>::new()).unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("w.h")).unwrap(),
        "void a() noexcept;\nvoid b() noexcept;\n"
    );
    assert_eq!(summary.insertions, 2);
    assert_eq!(summary.files_changed, 1);
}

fn plan_at(text: &str, params_end: u32) -> nothrow_check::InsertionPlan {
    let source = SourceBuffer::new(text);
    let len = source.len();
    let signature = Signature::new(Span::new(0, len), params_end, ExceptionSpecKind::None);
    compute_insertion_plan(&signature, &source).unwrap()
}

#[test]
fn rewrite_applies_duplicates_once() {
    let text = "void f(); void g();";
    let f = plan_at(text, 8);
    let g = plan_at(text, 18);
    let (rewritten, count) = rewrite(text, &[g, f.clone(), f]).unwrap();
    assert_eq!(count, 2);
    assert_eq!(rewritten, "void f() noexcept; void g() noexcept;");
}

#[test]
fn rewrite_with_no_plans_is_identity() {
    let (rewritten, count) = rewrite("int x;", &[]).unwrap();
    assert_eq!(rewritten, "int x;");
    assert_eq!(count, 0);
}

fn lex_to_string(text: &str, from: u32) -> Result<String, DriverError> {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.cpp");
    std::fs::write(&file, text).unwrap();
    let mut out: Vec<u8> = Vec::new();
    run_lex(&LexConfig { file, from }, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn lex_dumps_tokens_from_offset() {
    let out = lex_to_string("void f() const;", 8).unwrap();
    assert_eq!(
        out,
        concat!(
            "    9..14    keyword      const\n",
            "   14..15    `;`          ;\n",
            "   15..15    end of input \n",
        )
    );
}

#[test]
fn lex_escapes_spellings() {
    let out = lex_to_string("\"a\\tb\"", 0).unwrap();
    assert!(out.starts_with("    0..6     string       \\\"a\\\\tb\\\"\n"), "{out}");
}

#[test]
fn lex_rejects_bad_offsets() {
    assert!(matches!(
        lex_to_string("int x;", 7),
        Err(DriverError::OffsetOutOfRange { offset: 7, len: 6, .. })
    ));
    assert!(matches!(
        lex_to_string("int é;", 5),
        Err(DriverError::NotCharBoundary { offset: 5, .. })
    ));
}

fn explain(code: &str) -> Result<String, DriverError> {
    let mut out: Vec<u8> = Vec::new();
    run_explain(&ExplainConfig { code: code.to_owned() }, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn explain_prints_summary_then_details() {
    let out = explain("n0001").unwrap();
    assert!(
        out.starts_with("N0001: function is missing an exception specification\n\n"),
        "{out}"
    );
    assert!(out.contains("void put(int) const noexcept;"), "{out}");
}

#[test]
fn explain_rejects_unknown_codes() {
    let err = explain("E0001").unwrap_err();
    assert!(matches!(err, DriverError::UnknownCode(_)));
    assert_eq!(
        err.to_string(),
        "unknown diagnostic code `E0001`; codes look like N0001"
    );
}
