use super::*;

// === Construction ===

#[test]
fn empty_line() {
    let buf = LineBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn ascii_line() {
    let buf = LineBuffer::new("(+) 1 2");
    assert_eq!(buf.len(), 7);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"(+) 1 2");
    assert_eq!(buf.as_str(), "(+) 1 2");
    assert_eq!(buf.buf[7], 0);
}

#[test]
fn multibyte_line_round_trips_as_text() {
    let buf = LineBuffer::new("+5\u{00e9}");
    assert_eq!(buf.as_str(), "+5\u{00e9}");
    assert_eq!(buf.len(), 4);
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 60, 61, 62, 63, 64, 65, 127, 128, 1000] {
        let line = "1".repeat(len);
        let buf = LineBuffer::new(&line);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for line length {len}",
            buf.buf.len(),
        );
    }
}

#[test]
fn lookahead_padding_always_present() {
    // A line ending right before a cache-line boundary still leaves room for
    // the sentinel plus two bytes of lookahead.
    for len in [61, 62, 63, 64] {
        let line = "9".repeat(len);
        let buf = LineBuffer::new(&line);
        assert!(buf.buf.len() >= len + SENTINEL_PADDING);
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = LineBuffer::new("SQRT");
    for &b in &buf.buf[4..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn cursor_starts_at_zero() {
    let buf = LineBuffer::new("_");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'_');
    assert_eq!(cursor.line_len(), 1);
}
