//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nothrow_check::ReportRange;
use nothrow_diagnostic::emitter::ColorMode;

#[derive(Parser, Debug)]
#[command(
    name = "nothrow",
    about = "Find C++ functions without an exception specification and add `noexcept`",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report every signature in a manifest that is missing `noexcept`
    Check {
        /// Signature manifest (JSON) produced by the front end
        manifest: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// When to color terminal output
        #[arg(long, value_enum, default_value = "auto", env = "NOTHROW_COLOR")]
        color: ColorChoice,

        /// Source range each finding points at
        #[arg(long, value_enum, default_value = "point")]
        range: RangeChoice,
    },

    /// Insert `noexcept` into every signature in a manifest that is missing it
    Fix {
        /// Signature manifest (JSON) produced by the front end
        manifest: PathBuf,

        /// Print the rewritten sources instead of writing them back
        #[arg(long)]
        dry_run: bool,
    },

    /// Dump the tokens of a source file, starting at a byte offset
    Lex {
        /// C or C++ source file
        file: PathBuf,

        /// Byte offset to start lexing from
        #[arg(long, default_value_t = 0)]
        from: u32,
    },

    /// Describe a diagnostic code
    Explain {
        /// Code such as N0001
        code: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeChoice {
    /// Zero-width range at the insertion point
    Point,
    /// The whole function declaration
    Signature,
}

impl From<RangeChoice> for ReportRange {
    fn from(choice: RangeChoice) -> Self {
        match choice {
            RangeChoice::Point => ReportRange::Point,
            RangeChoice::Signature => ReportRange::Signature,
        }
    }
}
