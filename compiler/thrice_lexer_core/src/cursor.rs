//! Position-tracking cursor over a sentinel-terminated codepoint buffer.
//!
//! The cursor advances one codepoint at a time and maintains the 1-based
//! line and column of its position incrementally, so stamping a lexeme
//! boundary is O(1). It never moves past the end of the source: advancing at
//! EOF is a no-op.
//!
//! # Interior Null Codepoints
//!
//! The sentinel is `'\0'`. A `'\0'` read at `pos < source_len` is source
//! content; at `pos >= source_len` it is EOF. Predicates passed to
//! [`Cursor::eat_while`] never see the sentinel, because the loop checks EOF
//! first.

use crate::Location;

/// Cheap, `Copy` read head over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// Copying a cursor snapshots its offset, line and column; assigning the
/// copy back restores all three, which is how the scanner backtracks.
///
/// # Invariant
///
/// `buf[source_len]` is a `'\0'` sentinel. This is guaranteed by
/// `SourceBuffer` construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel).
    buf: &'a [char],
    /// Current read position (codepoint index into `buf`).
    pos: u32,
    /// Length of the actual source content.
    source_len: u32,
    /// 1-based line of `pos`.
    line: u32,
    /// 1-based column of `pos`.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at offset 0, line 1, column 1.
    pub(crate) fn new(buf: &'a [char], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "a sentinel must follow the source content"
        );
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
        }
    }

    /// Codepoint at the current position, `'\0'` at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.buf[self.pos as usize]
    }

    /// Returns `true` once every source codepoint has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current codepoint offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Snapshot of the current position as a [`Location`].
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.pos, self.line, self.column)
    }

    /// Advance past one codepoint, updating line and column.
    ///
    /// A no-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Consume the current codepoint if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        self.eat_if(|c| c == expected)
    }

    /// Consume the current codepoint if it satisfies `pred`.
    #[inline]
    pub fn eat_if(&mut self, pred: impl FnOnce(char) -> bool) -> bool {
        if !self.is_eof() && pred(self.current()) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current codepoint.
    ///
    /// Returns the number of codepoints consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> u32 {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
        self.pos - start
    }

    /// Returns `true` if the source at the current position starts with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        let mut rest = self.buf[self.pos as usize..self.source_len as usize].iter();
        text.chars().all(|c| rest.next() == Some(&c))
    }

    /// Consume `text` if the source at the current position starts with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if !self.starts_with(text) {
            return false;
        }
        for _ in text.chars() {
            self.advance();
        }
        true
    }

    /// Advance up to and including the next `'\n'`, or to EOF.
    pub fn eat_line(&mut self) {
        while !self.is_eof() {
            let c = self.current();
            self.advance();
            if c == '\n' {
                break;
            }
        }
    }

    /// Advance until `terminator` has been consumed.
    ///
    /// Returns `false` (with the cursor at EOF) if the source ends first.
    pub fn eat_through(&mut self, terminator: &str) -> bool {
        while !self.is_eof() {
            if self.eat_str(terminator) {
                return true;
            }
            self.advance();
        }
        false
    }

    /// Source codepoints in `[start, pos)`.
    pub fn slice_from(&self, start: u32) -> &'a [char] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds position {}", self.pos);
        &self.buf[start as usize..self.pos as usize]
    }
}
