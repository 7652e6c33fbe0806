//! Owned source text with a zero sentinel after the last byte.
//!
//! ```text
//! [ source bytes ... | 0x00 | 0x00 padding ... ]
//!   0                  len    rounded up to a multiple of 64
//! ```
//!
//! The scanner stops on `0x00` instead of checking `pos < len`, and the
//! padding keeps two bytes of lookahead in bounds at the very end.
//!
//! Construction also records the two encoding oddities a `&str` can still
//! carry: a UTF-8 byte order mark and interior NUL bytes. Scanning goes ahead
//! regardless; the driver reports them.

use crate::Cursor;

const ALIGN: usize = 64;
const LOOKAHEAD: usize = 2;

/// Sentinel-terminated copy of one source file.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// A byte range with an encoding problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    pub pos: u32,
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// `EF BB BF` at offset 0.
    Utf8Bom,
    /// A `0x00` byte inside the text.
    InteriorNull,
}

impl EncodingIssueKind {
    pub fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "file starts with a UTF-8 byte order mark",
            EncodingIssueKind::InteriorNull => "file contains a null byte",
        }
    }
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Text longer than `u32::MAX` bytes is cut off at that length; the
    /// driver refuses such files before building a buffer.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let content = &bytes[..len as usize];

        let padded = (content.len() + 1 + LOOKAHEAD).next_multiple_of(ALIGN);
        let mut buf = Vec::with_capacity(padded);
        buf.extend_from_slice(content);
        buf.resize(padded, 0);

        SourceBuffer {
            buf,
            len,
            encoding_issues: encoding_issues(content),
        }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// The source text. Empty only if construction cut a character in half.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at(0)
    }

    /// Cursor starting at `offset`; `offset == len()` gives a cursor at end
    /// of input.
    ///
    /// # Panics
    ///
    /// If `offset > len()`.
    pub fn cursor_at(&self, offset: u32) -> Cursor<'_> {
        assert!(
            offset <= self.len,
            "cursor offset {offset} is past the end of the source ({} bytes)",
            self.len
        );
        Cursor::new_at(&self.buf, self.len, offset)
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn encoding_issues(content: &[u8]) -> Vec<EncodingIssue> {
    let bom = content.starts_with(b"\xEF\xBB\xBF").then_some(EncodingIssue {
        kind: EncodingIssueKind::Utf8Bom,
        pos: 0,
        len: 3,
    });
    // `content` is at most `u32::MAX` bytes long, so every offset fits.
    let nulls = memchr::memchr_iter(0, content)
        .filter_map(|pos| u32::try_from(pos).ok())
        .map(|pos| EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos,
            len: 1,
        });
    bom.into_iter().chain(nulls).collect()
}
