//! nothrow CLI
//!
//! Exit status: `0` clean, `1` findings reported, `2` fatal error.

use std::process::ExitCode;

use clap::Parser;
use nothrow::cli::Cli;
use nothrow::config::Config;

fn main() -> ExitCode {
    nothrow::init_tracing();
    let cli = Cli::parse();
    let config = Config::from(cli.command);

    match nothrow::run(&config) {
        Ok(summary) => {
            // A fix run succeeds once everything fixable is fixed.
            let code = match config {
                Config::Fix(_) => u8::from(summary.errors > 0),
                Config::Check(_) | Config::Lex(_) | Config::Explain(_) => summary.exit_code(),
            };
            ExitCode::from(code)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
