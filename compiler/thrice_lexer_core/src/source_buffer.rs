//! Sentinel-terminated codepoint buffer.
//!
//! The buffer stores one decoded source file as a `Vec<char>` followed by a
//! `'\0'` sentinel, so the cursor can read the current codepoint at EOF
//! without a bounds check failing.
//!
//! Interior `'\0'` codepoints are legal source content. Consumers distinguish
//! them from the sentinel by comparing the position against [`SourceBuffer::len`].

use std::fmt;

use crate::{Cursor, LineIndex, Location};


/// Immutable, length-known sequence of Unicode codepoints for one source file.
///
/// # Layout
///
/// ```text
/// [codepoints..., '\0']
///  ^              ^
///  0              source_len (sentinel)
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SourceBuffer {
    /// Owned buffer: `[codepoints..., sentinel]`.
    buf: Vec<char>,
    /// Number of codepoints of actual source content.
    source_len: u32,
}

impl SourceBuffer {
    /// Decode `source` into a codepoint buffer.
    ///
    /// # File Size
    ///
    /// Sources longer than `u32::MAX` codepoints saturate the length; the
    /// trailing content is unreachable to the cursor.
    pub fn new(source: &str) -> Self {
        Self::from_chars(source.chars())
    }

    /// Build a buffer from already-decoded codepoints.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut buf: Vec<char> = chars.into_iter().collect();
        let source_len = u32::try_from(buf.len()).unwrap_or(u32::MAX);
        buf.push('\0');
        Self { buf, source_len }
    }

    /// The source codepoints (without the sentinel).
    pub fn as_chars(&self) -> &[char] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at offset 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Number of codepoints in the source.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Codepoints in `[start, end)`, clamped to the source.
    pub fn slice(&self, start: u32, end: u32) -> &[char] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Codepoints in `[start, end)` collected into a `String`.
    pub fn text(&self, start: u32, end: u32) -> String {
        self.slice(start, end).iter().collect()
    }

    /// Location of `offset`, counting newlines from the start of the buffer.
    ///
    /// O(offset). Use a [`LineIndex`] for repeated queries.
    pub fn location_at(&self, offset: u32) -> Location {
        let mut line = 1;
        let mut column = 1;
        for &c in self.slice(0, offset) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location::new(offset.min(self.source_len), line, column)
    }

    /// Build a [`LineIndex`] over this buffer.
    pub fn line_index(&self) -> LineIndex {
        LineIndex::build(self)
    }
}

impl fmt::Display for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &c in self.as_chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("len", &self.source_len)
            .finish_non_exhaustive()
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
