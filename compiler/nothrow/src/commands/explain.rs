use std::io::Write;

use nothrow_diagnostic::ErrorCode;

use crate::config::ExplainConfig;
use crate::error::DriverError;

pub fn run_explain<W: Write>(config: &ExplainConfig, mut out: W) -> Result<(), DriverError> {
    let code: ErrorCode = config.code.trim().parse()?;
    writeln!(out, "{code}: {}\n", code.description())?;
    writeln!(out, "{}", code.explanation())?;
    out.flush()?;
    Ok(())
}
