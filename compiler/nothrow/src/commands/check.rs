use std::io::Write;

use nothrow_check::InsertionPlanner;
use nothrow_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, SourceContext, TerminalEmitter};

use super::Summary;
use crate::analyze::{analyze_manifest, FileOutcome};
use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::error::DriverError;
use crate::manifest::Manifest;

/// Report every finding in the manifest to `out`.
///
/// `is_tty` only matters for automatic color selection.
pub fn run_check<W: Write>(
    config: &CheckConfig,
    out: W,
    is_tty: bool,
) -> Result<Summary, DriverError> {
    let manifest = Manifest::load(&config.manifest)?;
    let outcomes = analyze_manifest(&manifest, InsertionPlanner::new(config.plan))?;
    let summary = Summary::from_outcomes(&outcomes);

    match config.format {
        OutputFormat::Terminal => {
            let mut emitter = TerminalEmitter::with_color_mode(out, config.color, is_tty);
            report(&mut emitter, &outcomes);
            if summary.errors + summary.warnings > 0 {
                emitter.emit_summary(summary.errors, summary.warnings);
            }
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin();
            report(&mut emitter, &outcomes);
            emitter.end();
            emitter.flush();
        }
    }
    Ok(summary)
}

fn report(emitter: &mut impl DiagnosticEmitter, outcomes: &[FileOutcome]) {
    for outcome in outcomes.iter().filter(|o| !o.diagnostics.is_empty()) {
        let text = outcome.text.clone().unwrap_or_default();
        emitter.set_source(Some(SourceContext::new(outcome.display_path.clone(), text)));
        emitter.emit_all(&outcome.diagnostics);
    }
    emitter.set_source(None);
}
