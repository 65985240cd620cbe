//! Sentinel-terminated line buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the line content,
//! followed by zero padding. The tokenizer looks up to two bytes ahead of
//! the cursor (`(+)`), so the padding always covers `peek2()` at end of
//! line. The total buffer size is rounded up to the next 64-byte boundary.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel plus the lookahead the cursor may read past the last byte.
const SENTINEL_PADDING: usize = 3;

/// Sentinel-terminated copy of one input line.
///
/// # Layout
///
/// ```text
/// [line_bytes..., 0x00, padding_zeros...]
///  ^              ^     ^
///  0              |     rounded up to 64-byte boundary
///            line_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct LineBuffer {
    /// Owned buffer: `[line_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the line content (excludes sentinel and padding).
    line_len: u32,
}

impl LineBuffer {
    /// Copy `line` into a zero-padded buffer.
    ///
    /// Lines longer than `u32::MAX` bytes are truncated to `u32::MAX`; the
    /// cursor never reads past that length.
    pub fn new(line: &str) -> Self {
        let bytes = line.as_bytes();
        let len = bytes.len();

        let padded_len = (len + SENTINEL_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..len].copy_from_slice(bytes);

        Self {
            buf,
            line_len: u32::try_from(len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the line bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.line_len as usize]
    }

    /// Returns the line as text.
    ///
    /// The buffer was built from a `&str`; if a truncated length ever split a
    /// UTF-8 sequence, the text is empty rather than invalid.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.as_str(), &self.buf, self.line_len)
    }

    /// Length of the line in bytes.
    pub fn len(&self) -> u32 {
        self.line_len
    }

    /// Returns `true` if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.line_len == 0
    }
}

#[cfg(test)]
mod tests;
