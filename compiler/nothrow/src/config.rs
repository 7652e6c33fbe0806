//! Resolved settings for each command.
//!
//! The CLI layer parses arguments; commands only ever see these.

use std::path::PathBuf;

use nothrow_check::PlanOptions;
use nothrow_diagnostic::emitter::ColorMode;

use crate::cli::{Commands, OutputFormat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    pub manifest: PathBuf,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub plan: PlanOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixConfig {
    pub manifest: PathBuf,
    pub dry_run: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    pub file: PathBuf,
    pub from: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainConfig {
    pub code: String,
}

/// A parsed command, ready to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Config {
    Check(CheckConfig),
    Fix(FixConfig),
    Lex(LexConfig),
    Explain(ExplainConfig),
}

impl From<Commands> for Config {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Check {
                manifest,
                format,
                color,
                range,
            } => Config::Check(CheckConfig {
                manifest,
                format,
                color: color.into(),
                plan: PlanOptions {
                    report_range: range.into(),
                },
            }),
            Commands::Fix { manifest, dry_run } => Config::Fix(FixConfig { manifest, dry_run }),
            Commands::Lex { file, from } => Config::Lex(LexConfig { file, from }),
            Commands::Explain { code } => Config::Explain(ExplainConfig { code }),
        }
    }
}
