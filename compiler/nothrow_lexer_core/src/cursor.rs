//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never check bounds against the source length. The buffer ends in a
//! `0x00` sentinel followed by zero padding, so a loop that stops on `0x00`
//! stops at end of input, and `peek`/`peek2` past the end read padding.
//! A `0x00` before `source_len` is an interior NUL, not end of input; only
//! [`Cursor::is_eof`] tells the two apart.

/// Position in a sentinel-terminated buffer.
///
/// `Copy`, so scanner state can be snapshotted and replayed for free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `buf[source_len]` must be the sentinel and `pos <= source_len`.
    pub(crate) fn new_at(buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert!((source_len as usize) < buf.len(), "buffer has no sentinel");
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte is not 0x00");
        debug_assert!(pos <= source_len, "cursor starts past the sentinel");
        Cursor {
            buf,
            pos,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text in `start..end`.
    ///
    /// Empty if the range splits a character, which can only happen when
    /// scanning started inside one.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len, "bad slice {start}..{end}");
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or_default()
    }

    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Space, tab, vertical tab, form feed. Newlines are tokens of their own.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0B | 0x0C));
    }

    /// Step over one UTF-8 encoded character, stopping at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.pos = (self.pos + width).min(self.source_len);
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Move `offset` bytes forward (an offset into [`rest`](Self::rest)), or
    /// to end of input when the search came up empty.
    fn jump(&mut self, offset: Option<usize>) -> bool {
        match offset.and_then(|off| u32::try_from(off).ok()) {
            Some(off) => {
                self.pos += off;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    /// Stop on the next `\n`, or at end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.jump(memchr::memchr(b'\n', self.rest()));
    }

    /// Skip ordinary literal content up to the closing `quote`, a backslash,
    /// `\n` or `\r`, and return that byte; `0` at end of input.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        let rest = self.rest();
        let delim = memchr::memchr3(quote, b'\\', b'\n', rest);
        let cr = memchr::memchr(b'\r', rest);
        let nearest = match (delim, cr) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if self.jump(nearest) {
            self.current()
        } else {
            0
        }
    }

    /// Move just past the next occurrence of `needle`. Returns `false`, at
    /// end of input, if there is none.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        let found = memchr::memmem::find(self.rest(), needle).map(|off| off + needle.len());
        self.jump(found)
    }
}
