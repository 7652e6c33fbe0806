use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parse_full_entry() {
    let manifest = Manifest::parse(
        r#"{
            "files": [{
                "path": "src/widget.cpp",
                "language": "c++",
                "signatures": [{
                    "name": "Widget::size",
                    "span": { "start": 10, "end": 34 },
                    "params_end": 28,
                    "exception_spec": "no_throw_equivalent",
                    "system_header": true,
                    "implicit": true
                }]
            }]
        }"#,
    );
    let Ok(manifest) = manifest else {
        panic!("manifest should parse: {manifest:?}");
    };
    let file = &manifest.files[0];
    assert_eq!(file.path, PathBuf::from("src/widget.cpp"));
    assert_eq!(file.language, Language::Cxx);
    assert_eq!(
        file.signatures[0],
        SignatureEntry {
            name: "Widget::size".to_string(),
            span: Span::new(10, 34),
            params_end: 28,
            exception_spec: ExceptionSpecKind::NoThrowEquivalent,
            system_header: true,
            implicit: true,
        }
    );
}

#[test]
fn defaults() {
    let manifest = Manifest::parse(
        r#"{ "files": [
            { "path": "a.cpp", "signatures": [
                { "span": { "start": 0, "end": 8 }, "params_end": 8 }
            ] },
            { "path": "b.c", "language": "c" }
        ] }"#,
    );
    let Ok(manifest) = manifest else {
        panic!("manifest should parse: {manifest:?}");
    };
    let sig = &manifest.files[0].signatures[0];
    assert_eq!(manifest.files[0].language, Language::Cxx);
    assert_eq!(sig.exception_spec, ExceptionSpecKind::None);
    assert!(!sig.system_header);
    assert!(!sig.implicit);
    assert!(sig.name.is_empty());
    assert_eq!(manifest.files[1].language, Language::C);
    assert!(manifest.files[1].signatures.is_empty());
}

#[test]
fn every_exception_spec_spelling() {
    for (text, kind) in [
        ("none", ExceptionSpecKind::None),
        ("unevaluated", ExceptionSpecKind::Unevaluated),
        ("dynamic_list", ExceptionSpecKind::DynamicList),
        ("no_throw_equivalent", ExceptionSpecKind::NoThrowEquivalent),
        ("other", ExceptionSpecKind::Other),
    ] {
        let json = format!(
            r#"{{ "files": [{{ "path": "a.cpp", "signatures": [
                {{ "span": {{ "start": 0, "end": 1 }}, "params_end": 1, "exception_spec": "{text}" }}
            ] }}] }}"#
        );
        let parsed = Manifest::parse(&json).map(|m| m.files[0].signatures[0].exception_spec);
        assert_eq!(parsed.ok(), Some(kind), "{text}");
    }
}

#[test]
fn unknown_exception_spec_is_rejected() {
    let result = Manifest::parse(
        r#"{ "files": [{ "path": "a.cpp", "signatures": [
            { "span": { "start": 0, "end": 1 }, "params_end": 1, "exception_spec": "maybe" }
        ] }] }"#,
    );
    assert!(result.is_err());
}

#[test]
fn relative_paths_resolve_against_manifest_dir() {
    let Ok(mut manifest) = Manifest::parse(r#"{ "files": [{ "path": "src/a.cpp" }] }"#) else {
        panic!("manifest should parse");
    };
    manifest.base_dir = PathBuf::from("/work/project");
    assert_eq!(
        manifest.resolve(&manifest.files[0]),
        PathBuf::from("/work/project/src/a.cpp")
    );
}

#[test]
fn to_signature_copies_fields() {
    let entry = SignatureEntry {
        name: "f".to_string(),
        span: Span::new(0, 12),
        params_end: 12,
        exception_spec: ExceptionSpecKind::Unevaluated,
        system_header: false,
        implicit: false,
    };
    assert_eq!(
        entry.to_signature(),
        Signature::new(Span::new(0, 12), 12, ExceptionSpecKind::Unevaluated)
    );
}
