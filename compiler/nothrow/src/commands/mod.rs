//! Command implementations.
//!
//! Each command writes to caller-supplied writers so tests can capture
//! output. Per-signature problems are reported as diagnostics and counted;
//! only fatal problems come back as [`DriverError`](crate::error::DriverError).

mod check;
mod explain;
mod fix;
mod lex;

pub use check::run_check;
pub use explain::run_explain;
pub use fix::{rewrite, run_fix};
pub use lex::run_lex;

use crate::analyze::FileOutcome;

/// Counts reported at the end of a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    /// `noexcept` insertions written (or printed, in a dry run).
    pub insertions: usize,
    pub files_changed: usize,
}

impl Summary {
    fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        outcomes.iter().fold(Summary::default(), |mut summary, outcome| {
            summary.errors += outcome.error_count();
            summary.warnings += outcome.warning_count();
            summary
        })
    }

    /// Process exit status: `0` when nothing was reported, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.errors + self.warnings > 0)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
