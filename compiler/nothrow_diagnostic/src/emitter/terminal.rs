//! Human-readable output, optionally colored.
//!
//! With a [`SourceContext`] set, each label is rendered as a snippet:
//!
//! ```text
//! warning[N0001]: 'noexcept' missing
//!  --> src/widget.cpp:3:19
//!   |
//! 3 | int h(int x) const;
//!   |                   ^ 'noexcept' missing
//!   |
//!   = help: add `noexcept`
//! ```
//!
//! Without one, labels fall back to raw byte ranges (`--> 27..27: ...`).

use std::io::Write;

use crate::{Diagnostic, Label, Severity};

use super::{DiagnosticEmitter, SourceContext};

/// ANSI styles used in the output.
#[derive(Copy, Clone)]
enum Style {
    Error,
    Warning,
    Help,
    Bold,
    Gutter,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Help => "\x1b[1;32m",
            Style::Bold => "\x1b[1m",
            Style::Gutter => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Style {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Number of decimal digits in `n` (at least 1).
fn digit_count(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// When to emit ANSI color codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.code())
        } else {
            write!(self.writer, "{text}")
        };
    }

    fn header(&mut self, diagnostic: &Diagnostic) {
        self.paint(
            diagnostic.severity.as_str(),
            Style::for_severity(diagnostic.severity),
        );
        self.paint(&format!("[{}]", diagnostic.code), Style::Bold);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn fallback_label(&mut self, label: &Label, style: Style) {
        let _ = write!(self.writer, "  --> {}: ", label.span);
        self.paint(&label.message, style);
        let _ = writeln!(self.writer);
    }

    /// `path:line:col` header, then each label's line with carets under it.
    fn snippets(&mut self, ctx: &SourceContext, labels: &[Label], style: Style) {
        let Some(first) = labels.first() else {
            let _ = writeln!(self.writer, "  --> {}", ctx.path);
            return;
        };
        let (line, col) = ctx.line_col(first.span.start);
        let last_line = labels
            .iter()
            .map(|l| ctx.line_col(l.span.start).0)
            .max()
            .unwrap_or(line);
        let pad = " ".repeat(digit_count(last_line));

        let _ = writeln!(self.writer, "{pad}--> {}:{line}:{col}", ctx.path);
        self.empty_gutter(&pad);

        for label in labels {
            let (line, col) = ctx.line_col(label.span.start);
            let text = ctx.line_text(line);

            // Carets stop at the end of the first line; a point span gets one.
            let (end_line, end_col) = ctx.line_col(label.span.end);
            let end_col = if end_line == line {
                end_col
            } else {
                u32::try_from(text.chars().count()).unwrap_or(u32::MAX - 1) + 1
            };
            let carets = (end_col.saturating_sub(col) as usize).max(1);

            let _ = write!(self.writer, "{line:>width$} ", width = pad.len());
            self.paint("|", Style::Gutter);
            let _ = writeln!(self.writer, " {text}");

            let _ = write!(self.writer, "{pad} ");
            self.paint("|", Style::Gutter);
            let _ = write!(self.writer, " {}", " ".repeat(col as usize - 1));
            self.paint(&format!("{} {}", "^".repeat(carets), label.message), style);
            let _ = writeln!(self.writer);
        }
        self.empty_gutter(&pad);
    }

    fn empty_gutter(&mut self, pad: &str) {
        let _ = write!(self.writer, "{pad} ");
        self.paint("|", Style::Gutter);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn set_source(&mut self, source: Option<SourceContext>) {
        self.source = source;
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.header(diagnostic);
        let style = Style::for_severity(diagnostic.severity);

        if let Some(ctx) = self.source.take() {
            self.snippets(&ctx, &diagnostic.labels, style);
            self.source = Some(ctx);
        } else {
            for label in &diagnostic.labels {
                self.fallback_label(label, style);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", Style::Bold);
            let _ = writeln!(self.writer, ": {note}");
        }
        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.paint("help", Style::Help);
            let _ = writeln!(self.writer, ": {}", suggestion.message);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let warnings = format!("{warning_count} warning{}", plural_s(warning_count));
        match (error_count, warning_count) {
            (0, 0) => {}
            (0, _) => {
                self.paint("warning", Style::Warning);
                let _ = writeln!(self.writer, ": {warnings} emitted");
            }
            (_, 0) => {
                self.paint("error", Style::Error);
                let _ = writeln!(self.writer, ": {error_count} error{} emitted", plural_s(error_count));
            }
            _ => {
                self.paint("error", Style::Error);
                let _ = writeln!(
                    self.writer,
                    ": {error_count} error{}; {warnings} emitted",
                    plural_s(error_count)
                );
            }
        }
    }
}
