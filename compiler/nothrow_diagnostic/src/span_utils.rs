//! Byte offset to line and column conversion.
//!
//! Columns count characters, not bytes, so a caret lines up under
//! multi-byte text in a terminal.

/// Start offset of every line in one source text.
///
/// ```
/// use nothrow_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "int f();\nint g();";
/// let table = LineOffsetTable::new(source);
///
/// assert_eq!(table.line_col(source, 0), (1, 1));
/// assert_eq!(table.line_col(source, 13), (2, 5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    starts: Vec<u32>,
}

impl LineOffsetTable {
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(
                source
                    .match_indices('\n')
                    .map(|(nl, _)| u32::try_from(nl + 1).unwrap_or(u32::MAX)),
            )
            .collect();
        LineOffsetTable { starts }
    }

    /// 1-based line holding `offset`. A newline belongs to the line it ends.
    pub fn line_of(&self, offset: u32) -> u32 {
        let index = self.starts.partition_point(|&start| start <= offset);
        // `starts[0] == 0`, so `index >= 1`.
        u32::try_from(index).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)` of `offset`. Offsets past the end clamp to it.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_of(offset);
        let start = self.line_start(line).unwrap_or(0) as usize;
        let end = source.len().min(offset as usize);
        let chars = source.get(start..end).map_or(0, |s| s.chars().count());
        (line, u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn line_start(&self, line: u32) -> Option<u32> {
        let index = line.checked_sub(1)?;
        self.starts.get(index as usize).copied()
    }

    /// A 1-based line without its `\n` or `\r\n`.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start(line)? as usize;
        let end = self.line_start(line + 1).map_or(source.len(), |s| s as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests;
