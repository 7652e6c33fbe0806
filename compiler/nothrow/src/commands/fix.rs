use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use nothrow_check::{InsertionPlan, InsertionPlanner};
use nothrow_diagnostic::emitter::{ColorMode, DiagnosticEmitter, SourceContext, TerminalEmitter};
use nothrow_diagnostic::fixes::{ChangeTracker, EditError};
use nothrow_diagnostic::{Diagnostic, ErrorCode};

use super::Summary;
use crate::analyze::{analyze_manifest, FileOutcome};
use crate::config::FixConfig;
use crate::error::DriverError;
use crate::manifest::Manifest;

/// One file on disk and every plan aimed at it, whichever manifest entries
/// they came from.
struct PendingFile<'a> {
    outcome: &'a FileOutcome,
    text: &'a str,
    plans: Vec<InsertionPlan>,
}

/// Insert `noexcept` wherever the manifest calls for it.
///
/// Rewritten files are written back in place, or printed to `out` in a dry
/// run. Findings that cannot be fixed are rendered to `err`. Entries naming
/// the same file are merged so it is rewritten once.
pub fn run_fix<O: Write, E: Write>(
    config: &FixConfig,
    out: &mut O,
    err: E,
) -> Result<Summary, DriverError> {
    let manifest = Manifest::load(&config.manifest)?;
    let outcomes = analyze_manifest(&manifest, InsertionPlanner::default())?;
    let mut emitter = TerminalEmitter::with_color_mode(err, ColorMode::Never, false);
    let mut summary = Summary::default();

    let mut pending: Vec<PendingFile<'_>> = Vec::new();
    let mut by_path: HashMap<PathBuf, usize> = HashMap::new();
    for outcome in &outcomes {
        let unfixable: Vec<&Diagnostic> = outcome
            .diagnostics
            .iter()
            .filter(|d| d.code != ErrorCode::N0001)
            .collect();
        if !unfixable.is_empty() {
            let text = outcome.text.clone().unwrap_or_default();
            emitter.set_source(Some(SourceContext::new(outcome.display_path.clone(), text)));
            for diagnostic in &unfixable {
                emitter.emit(diagnostic);
            }
        }
        summary.errors += outcome.error_count();
        summary.warnings += unfixable.iter().filter(|d| !d.is_error()).count();

        let Some(text) = &outcome.text else {
            continue;
        };
        if outcome.plans.is_empty() {
            continue;
        }
        let key = std::fs::canonicalize(&outcome.path).unwrap_or_else(|_| outcome.path.clone());
        match by_path.get(&key) {
            Some(&index) => {
                tracing::debug!(path = %outcome.path.display(), "file listed again, merging plans");
                pending[index].plans.extend_from_slice(&outcome.plans);
            }
            None => {
                by_path.insert(key, pending.len());
                pending.push(PendingFile {
                    outcome,
                    text,
                    plans: outcome.plans.clone(),
                });
            }
        }
    }

    for file in &pending {
        let path = &file.outcome.path;
        let (rewritten, insertions) =
            rewrite(file.text, &file.plans).map_err(|source| DriverError::Edit {
                path: path.clone(),
                source,
            })?;

        if config.dry_run {
            writeln!(out, "==> {} <==", file.outcome.display_path)?;
            write!(out, "{rewritten}")?;
            if !rewritten.ends_with('\n') {
                writeln!(out)?;
            }
        } else {
            std::fs::write(path, rewritten).map_err(|source| DriverError::WriteSource {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), insertions, "rewrote file");
        }
        summary.insertions += insertions;
        summary.files_changed += 1;
    }
    emitter.flush();
    Ok(summary)
}

/// Apply `plans` to `text`, returning the new text and how many insertions
/// it received.
///
/// Plans that share an insertion point are applied once, so a signature
/// listed twice gains one `noexcept`, not two.
pub fn rewrite(text: &str, plans: &[InsertionPlan]) -> Result<(String, usize), EditError> {
    let mut plans = plans.to_vec();
    plans.sort_by_key(InsertionPlan::insert_offset);
    plans.dedup_by_key(|plan| plan.insert_offset());

    let mut tracker = ChangeTracker::new();
    for plan in &plans {
        tracker.push(plan.to_edit());
    }
    Ok((tracker.apply(text)?, tracker.len()))
}
