//! Per-file analysis: read the source, validate each signature, plan.
//!
//! Files are independent, so [`analyze_manifest`] fans out over them with
//! rayon. Results come back in manifest order regardless of scheduling.

use std::path::PathBuf;

use nothrow_check::{InsertionPlan, InsertionPlanner, SourceBuffer};
use nothrow_diagnostic::{Diagnostic, ErrorCode};
use nothrow_ir::Span;
use rayon::prelude::*;

use crate::error::DriverError;
use crate::manifest::{FileEntry, Language, Manifest, SignatureEntry};

/// Everything found in one source file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Where the file was read from.
    pub path: PathBuf,
    /// The path as the manifest wrote it, for messages.
    pub display_path: String,
    /// Source text, or `None` when the file is not UTF-8.
    pub text: Option<String>,
    pub plans: Vec<InsertionPlan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Analyze every C++ file in the manifest.
///
/// Files in other languages produce no outcome. The first unreadable file
/// aborts the whole run.
pub fn analyze_manifest(
    manifest: &Manifest,
    planner: InsertionPlanner,
) -> Result<Vec<FileOutcome>, DriverError> {
    let outcomes: Vec<Option<FileOutcome>> = manifest
        .files
        .par_iter()
        .map(|entry| analyze_file(manifest, entry, planner))
        .collect::<Result<_, _>>()?;
    Ok(outcomes.into_iter().flatten().collect())
}

/// Analyze one manifest entry.
#[tracing::instrument(level = "debug", skip_all, fields(path = %entry.path.display()))]
pub fn analyze_file(
    manifest: &Manifest,
    entry: &FileEntry,
    planner: InsertionPlanner,
) -> Result<Option<FileOutcome>, DriverError> {
    if entry.language != Language::Cxx {
        tracing::debug!("not a C++ file, skipping");
        return Ok(None);
    }

    let path = manifest.resolve(entry);
    let bytes = std::fs::read(&path).map_err(|source| DriverError::ReadSource {
        path: path.clone(),
        source,
    })?;
    if u32::try_from(bytes.len()).is_err() {
        return Err(DriverError::FileTooLarge { path });
    }
    let display_path = entry.path.display().to_string();

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("source is not UTF-8");
            let diagnostic = not_utf8(err.as_bytes(), err.utf8_error().valid_up_to());
            return Ok(Some(FileOutcome {
                path,
                display_path,
                text: None,
                plans: Vec::new(),
                diagnostics: vec![diagnostic],
            }));
        }
    };

    let (plans, diagnostics) = analyze_source(&text, &entry.signatures, planner);
    tracing::debug!(
        signatures = entry.signatures.len(),
        plans = plans.len(),
        diagnostics = diagnostics.len(),
        "analyzed file"
    );
    Ok(Some(FileOutcome {
        path,
        display_path,
        text: Some(text),
        plans,
        diagnostics,
    }))
}

/// Plan every signature against already-loaded source text.
///
/// Signatures declared in system headers, and implicit declarations, are
/// skipped. Signatures whose
/// offsets do not fit the text become `N0002` errors.
pub fn analyze_source(
    text: &str,
    signatures: &[SignatureEntry],
    planner: InsertionPlanner,
) -> (Vec<InsertionPlan>, Vec<Diagnostic>) {
    let source = SourceBuffer::new(text);
    let mut plans = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = source
        .encoding_issues()
        .iter()
        .map(|issue| {
            Diagnostic::warning(ErrorCode::N0003)
                .with_message(issue.kind.description())
                .with_label(Span::new(issue.pos, issue.pos + issue.len), "here")
        })
        .collect();

    for entry in signatures {
        if entry.system_header || entry.implicit {
            tracing::trace!(
                name = %entry.name,
                system_header = entry.system_header,
                implicit = entry.implicit,
                "not spelled in editable source, skipping"
            );
            continue;
        }
        if let Err(diagnostic) = validate(entry, text) {
            diagnostics.push(diagnostic);
            continue;
        }
        let Some(plan) = planner.plan(&entry.to_signature(), &source) else {
            continue;
        };
        let mut diagnostic = plan.to_diagnostic();
        if !entry.name.is_empty() {
            diagnostic = diagnostic.with_note(format!("in function `{}`", entry.name));
        }
        diagnostics.push(diagnostic);
        plans.push(plan);
    }
    (plans, diagnostics)
}

/// Check that a signature's offsets describe this text.
fn validate(entry: &SignatureEntry, text: &str) -> Result<(), Diagnostic> {
    // Callers reject files over 4 GiB before this point.
    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    let span = entry.span;
    let problem = if span.start > span.end {
        Some("its span ends before it starts")
    } else if !span.fits_within(len) || entry.params_end > len {
        Some("its offsets are past the end of the file")
    } else if !text.is_char_boundary(entry.params_end as usize) {
        Some("its parameter list end is inside a character")
    } else {
        None
    };
    match problem {
        None => Ok(()),
        Some(problem) => {
            let name = if entry.name.is_empty() {
                "<unnamed>"
            } else {
                entry.name.as_str()
            };
            Err(Diagnostic::error(ErrorCode::N0002)
                .with_message(format!("signature `{name}` does not fit this file: {problem}"))
                .with_note(format!(
                    "span {}..{}, parameter list end {}, file is {len} bytes",
                    span.start, span.end, entry.params_end
                )))
        }
    }
}

fn not_utf8(bytes: &[u8], valid_up_to: usize) -> Diagnostic {
    let offset = u32::try_from(valid_up_to).unwrap_or(u32::MAX);
    let diagnostic = Diagnostic::error(ErrorCode::N0003)
        .with_message("file is not valid UTF-8")
        .with_note(format!("first invalid byte at offset {offset}"));
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        diagnostic.with_note("the file looks like UTF-16; convert it to UTF-8")
    } else {
        diagnostic
    }
}
