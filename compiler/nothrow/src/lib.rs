//! nothrow driver.
//!
//! Reads a signature manifest, plans `noexcept` insertions with
//! [`nothrow_check`], and reports or applies them.
//!
//! ```text
//! manifest.json -> analyze (per file, in parallel) -> check: diagnostics
//!                                                   -> fix:   rewritten sources
//! ```

pub mod analyze;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use std::io::{IsTerminal, Write};

use commands::Summary;
use config::Config;
use error::DriverError;

/// Run a parsed command against the real stdout and stderr.
pub fn run(config: &Config) -> Result<Summary, DriverError> {
    match config {
        Config::Check(check) => {
            let is_tty = std::io::stdout().is_terminal();
            commands::run_check(check, std::io::stdout().lock(), is_tty)
        }
        Config::Fix(fix) => {
            let mut out = std::io::stdout().lock();
            let summary = commands::run_fix(fix, &mut out, std::io::stderr().lock())?;
            out.flush()?;
            if !fix.dry_run && summary.insertions > 0 {
                eprintln!(
                    "inserted {} `noexcept` in {} file{}",
                    summary.insertions,
                    summary.files_changed,
                    if summary.files_changed == 1 { "" } else { "s" }
                );
            }
            Ok(summary)
        }
        Config::Lex(lex) => {
            let mut out = std::io::stdout().lock();
            commands::run_lex(lex, &mut out)?;
            out.flush()?;
            Ok(Summary::default())
        }
        Config::Explain(explain) => {
            commands::run_explain(explain, std::io::stdout().lock())?;
            Ok(Summary::default())
        }
    }
}
