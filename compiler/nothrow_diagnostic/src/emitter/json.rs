//! Machine-readable output: one JSON array, one object per diagnostic.
//!
//! ```json
//! [
//!   {
//!     "code": "N0001",
//!     "severity": "warning",
//!     "file": "src/a.cpp",
//!     "message": "'noexcept' missing",
//!     "labels": [{ "start": 12, "end": 12, "line": 1, "column": 13, "message": "'noexcept' missing" }],
//!     "notes": [],
//!     "suggestions": [{ "message": "add `noexcept`", "edits": [{ "start": 12, "end": 12, "text": " noexcept" }] }]
//!   }
//! ]
//! ```
//!
//! `line` and `column` appear only when a source is set. The shape is small
//! and fixed, so it is written by hand.

use std::io::Write;

use crate::fixes::TextEdit;
use crate::{Diagnostic, Label};

use super::{DiagnosticEmitter, JsonStr, SourceContext};

/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the last to get a complete array.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    source: Option<SourceContext>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
        }
    }

    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    pub fn end(&mut self) {
        let close = if self.first { "]" } else { "\n]" };
        let _ = writeln!(self.writer, "{close}");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn label(&self, label: &Label) -> String {
        let position = self.source.as_ref().map_or_else(String::new, |ctx| {
            let (line, column) = ctx.line_col(label.span.start);
            format!(", \"line\": {line}, \"column\": {column}")
        });
        format!(
            "{{ \"start\": {}, \"end\": {}{position}, \"message\": {} }}",
            label.span.start,
            label.span.end,
            JsonStr(&label.message),
        )
    }

    fn object(&self, diagnostic: &Diagnostic) -> String {
        let file = self
            .source
            .as_ref()
            .map_or_else(|| "null".to_owned(), |ctx| JsonStr(&ctx.path).to_string());
        let labels: Vec<String> = diagnostic.labels.iter().map(|l| self.label(l)).collect();
        let notes: Vec<String> = diagnostic
            .notes
            .iter()
            .map(|note| JsonStr(note).to_string())
            .collect();
        let suggestions: Vec<String> = diagnostic
            .suggestions
            .iter()
            .map(|suggestion| {
                let edits: Vec<String> = suggestion.edits.iter().map(edit).collect();
                format!(
                    "{{ \"message\": {}, \"edits\": [{}] }}",
                    JsonStr(&suggestion.message),
                    edits.join(", ")
                )
            })
            .collect();

        [
            "  {".to_owned(),
            format!("    \"code\": \"{}\",", diagnostic.code),
            format!("    \"severity\": \"{}\",", diagnostic.severity),
            format!("    \"file\": {file},"),
            format!("    \"message\": {},", JsonStr(&diagnostic.message)),
            format!("    \"labels\": {},", array(&labels)),
            format!("    \"notes\": {},", array(&notes)),
            format!("    \"suggestions\": {}", array(&suggestions)),
            "  }".to_owned(),
        ]
        .join("\n")
    }
}

fn edit(edit: &TextEdit) -> String {
    format!(
        "{{ \"start\": {}, \"end\": {}, \"text\": {} }}",
        edit.span.start,
        edit.span.end,
        JsonStr(&edit.new_text)
    )
}

/// Items one per line, indented under their key.
fn array(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_owned();
    }
    format!("[\n      {}\n    ]", items.join(",\n      "))
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn set_source(&mut self, source: Option<SourceContext>) {
        self.source = source;
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.first { "" } else { "," };
        self.first = false;
        let object = self.object(diagnostic);
        let _ = write!(self.writer, "{separator}\n{object}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array is the whole report.
    }
}
