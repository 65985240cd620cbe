//! Byte cursor over a sentinel-terminated line buffer.
//!
//! End of line is detected when the current byte is the sentinel (`0x00`)
//! and the position has reached the line length. A null byte at
//! `pos < line_len` is an ordinary (invalid) input byte, not end of line.

/// Byte cursor over a sentinel-terminated line.
///
/// Created via [`LineBuffer::cursor()`](crate::LineBuffer::cursor).
/// The cursor is [`Copy`]: saving a copy before a speculative match and
/// assigning it back is the rollback mechanism used by the tokenizer.
///
/// # Invariant
///
/// `buf[line_len]` is `0x00` and at least two more zero bytes follow it.
/// The cursor never advances past `line_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The line as text, for slicing diagnostics.
    text: &'a str,
    /// Sentinel-terminated buffer (line + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the line content (excludes sentinel and padding).
    line_len: u32,
}

/// &str = 16, &[u8] = 16, u32 = 4, u32 = 4 => 40 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 40);

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, buf: &'a [u8], line_len: u32) -> Self {
        debug_assert!(
            (line_len as usize) + 2 < buf.len(),
            "sentinel and lookahead must be within buffer bounds"
        );
        debug_assert!(buf[line_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            text,
            buf,
            pos: 0,
            line_len,
        }
    }

    /// Returns the byte at the current position, or `0x00` at end of line.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.line_len, "advance past end of line");
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes, stopping at end of line.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.line_len);
    }

    /// Returns `true` if the cursor has reached the end of the line.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.pos >= self.line_len
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the line content.
    #[inline]
    pub fn line_len(&self) -> u32 {
        self.line_len
    }

    /// Extract a substring of the line.
    ///
    /// Out-of-range or non-boundary ranges yield an empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.text.get(start as usize..end as usize).unwrap_or_default()
    }

    /// The rest of the line from the current position.
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos, self.line_len)
    }

    /// Returns `true` if the line continues with `prefix` at the cursor.
    ///
    /// Never matches past end of line.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buf[self.pos as usize..self.line_len as usize].starts_with(prefix)
    }

    /// Advance past whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`).
    ///
    /// The sentinel is not whitespace, so the loop stops at end of line.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') {
            self.pos += 1;
        }
    }

    /// Position of the next space at or after the cursor, or end of line.
    ///
    /// Used to delimit the offending token when reporting a bad argument.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by line_len which fits in u32"
    )]
    pub fn token_end(&self) -> u32 {
        let remaining = &self.buf[self.pos as usize..self.line_len as usize];
        match memchr::memchr(b' ', remaining) {
            Some(offset) => self.pos + offset as u32,
            None => self.line_len,
        }
    }
}
